//! Domain anchor registry.
//!
//! An [`AnchorSet`] maps a domain label (`medical`, `legal`, `spam`, ...) to a
//! unit-length centroid embedding. It is validated once at startup and never
//! mutated; swapping anchors means loading a new set.
//!
//! Anchors come from one of:
//! - [`AnchorSet::load`] / [`AnchorSet::load_with_dim`] over in-memory pairs
//! - [`AnchorSet::from_json_file`] for corpus-derived centroids on disk
//! - [`placeholder_anchors`] for development when no real centroids exist yet

pub mod file;
pub mod placeholder;
pub mod registry;


pub use file::{AnchorDef, AnchorFile};
pub use placeholder::{placeholder_anchors, placeholder_centroid};
pub use registry::AnchorSet;
