//! Remote identity resolution.
//!
//! Maps a local model name (`<repo>:<tag>`) onto the repository path and tag
//! the remote registry serves manifests under. Repositories without a
//! namespace are qualified under [`DEFAULT_NAMESPACE`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Namespace for repositories that carry no `/` qualifier.
pub const DEFAULT_NAMESPACE: &str = "library";

/// Canonical remote location of a local model.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RemoteIdentity {
    /// Fully qualified repository path (e.g., `library/llama2`).
    pub repository: String,
    /// Manifest tag (e.g., `7b`, `latest`).
    pub tag: String,
}

impl RemoteIdentity {
    /// Resolve `name` under the [`DEFAULT_NAMESPACE`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedName`] if `name` is not `<repo>:<tag>`.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        Self::resolve(name, DEFAULT_NAMESPACE)
    }

    /// Resolve `name` into a remote identity, qualifying bare repositories
    /// under `namespace`.
    ///
    /// The name is split on its first `:`. The tag may not contain another
    /// `:` (a registry host with a port is not a supported name form).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedName`] if the name has no `:`, the
    /// repository or tag is empty, or the tag contains a further `:`.
    pub fn resolve(name: &str, namespace: &str) -> Result<Self, CoreError> {
        let Some((repo, tag)) = name.split_once(':') else {
            return Err(CoreError::malformed(name, "missing ':' tag separator"));
        };
        if repo.is_empty() {
            return Err(CoreError::malformed(name, "empty repository"));
        }
        if tag.is_empty() {
            return Err(CoreError::malformed(name, "empty tag"));
        }
        if tag.contains(':') {
            return Err(CoreError::malformed(
                name,
                "more than one ':' separator (registry ports are not supported)",
            ));
        }

        let repository = if repo.contains('/') {
            repo.to_string()
        } else {
            format!("{namespace}/{repo}")
        };

        Ok(Self {
            repository,
            tag: tag.to_string(),
        })
    }

    /// Manifest path relative to the registry base URL.
    #[must_use]
    pub fn manifest_path(&self) -> String {
        format!("v2/{}/manifests/{}", self.repository, self.tag)
    }
}

impl fmt::Display for RemoteIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repository, self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn identity(repository: &str, tag: &str) -> RemoteIdentity {
        RemoteIdentity {
            repository: repository.to_string(),
            tag: tag.to_string(),
        }
    }

    #[test]
    fn bare_repository_gets_default_namespace() {
        assert_eq!(
            RemoteIdentity::parse("llama2:7b").unwrap(),
            identity("library/llama2", "7b")
        );
    }

    #[test]
    fn namespaced_repository_is_kept() {
        assert_eq!(
            RemoteIdentity::parse("myorg/llama2:7b").unwrap(),
            identity("myorg/llama2", "7b")
        );
    }

    #[test]
    fn custom_namespace_applies_to_bare_names_only() {
        assert_eq!(
            RemoteIdentity::resolve("mistral:latest", "mirror").unwrap(),
            identity("mirror/mistral", "latest")
        );
        assert_eq!(
            RemoteIdentity::resolve("team/mistral:latest", "mirror").unwrap(),
            identity("team/mistral", "latest")
        );
    }

    #[test]
    fn resolution_is_deterministic() {
        for name in ["llama2:7b", "myorg/llama2:7b", "a:1"] {
            assert_eq!(
                RemoteIdentity::parse(name).unwrap(),
                RemoteIdentity::parse(name).unwrap()
            );
        }
    }

    #[test]
    fn resolving_the_rendered_identity_is_stable() {
        let first = RemoteIdentity::parse("llama2:7b").unwrap();
        let second = RemoteIdentity::parse(&first.to_string()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_separator_is_malformed() {
        let err = RemoteIdentity::parse("llama2").unwrap_err();
        assert!(matches!(err, CoreError::MalformedName { ref name, .. } if name == "llama2"));
    }

    #[test]
    fn empty_parts_are_malformed() {
        assert!(RemoteIdentity::parse(":7b").is_err());
        assert!(RemoteIdentity::parse("llama2:").is_err());
    }

    #[test]
    fn registry_port_is_malformed() {
        let err = RemoteIdentity::parse("localhost:5000/llama2:7b").unwrap_err();
        assert!(err.to_string().contains("more than one ':'"));
    }

    #[test]
    fn manifest_path_layout() {
        let id = RemoteIdentity::parse("llama2:7b").unwrap();
        assert_eq!(id.manifest_path(), "v2/library/llama2/manifests/7b");
        assert_eq!(id.to_string(), "library/llama2:7b");
    }
}
