use anyhow::Context;
use figment::providers::Serialized;
use msync_config::MsyncConfig;

use crate::cli::GlobalFlags;

/// Load `.env`, layered config, and command-line overrides, then validate.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<MsyncConfig> {
    dotenvy::dotenv().ok();

    let mut figment = MsyncConfig::figment();
    if let Some(url) = &flags.local_url {
        figment = figment.merge(Serialized::default("local.base_url", url));
    }
    if let Some(url) = &flags.registry_url {
        figment = figment.merge(Serialized::default("registry.base_url", url));
    }

    let config: MsyncConfig = figment
        .extract()
        .context("failed to load msync configuration")?;
    config.validate()?;

    tracing::debug!(
        local = %config.local.base_url,
        registry = %config.registry.base_url,
        namespace = %config.registry.namespace,
        "configuration loaded"
    );
    Ok(config)
}
