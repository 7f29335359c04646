//! # msync-core
//!
//! Core types, identity resolution, and fingerprinting for modelsync.
//!
//! This crate provides the pieces of the staleness-detection protocol that do
//! not touch the network:
//! - Local inventory entries and their wire shape
//! - Remote identity resolution (`name:tag` -> `namespace/name`, `tag`)
//! - Canonical serialization and SHA-256 fingerprinting of remote descriptors
//! - The per-run staleness report
//! - Cross-cutting error types

pub mod errors;
pub mod fingerprint;
pub mod identity;
pub mod model;
pub mod report;

pub use errors::CoreError;
pub use fingerprint::{Fingerprint, RemoteDescriptor, canonical_bytes, is_stale};
pub use identity::{DEFAULT_NAMESPACE, RemoteIdentity};
pub use model::{InventoryResponse, LocalModel};
pub use report::{FingerprintRecord, SkippedModel, StalenessReport};
