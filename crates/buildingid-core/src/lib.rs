//! Building identifier core - canonical matching keys for building addresses
//!
//! This is the single source of truth for identifier semantics.
//! The CLI and all language bindings (Python, JavaScript, Go) call into this
//! same core.
//!
//! # Architecture
//!
//! ```text
//! address + postcode → Normalizer → identifier → Validator → BuildingIdentifier
//!                                        ↓
//!                                     Grouping → records per building
//! ```
//!
//! # Guarantees
//!
//! - **Total**: normalization and validation accept every string and never fail
//! - **Deterministic**: same input always produces identical output
//! - **Closed**: every non-empty normalizer output passes validation
//! - **Literal**: no abbreviation, plural or typo folding

pub mod error;
pub mod grouping;
pub mod identifier;
pub mod normalizer;
pub mod validator;

pub use error::{Error, Result};
pub use grouping::{group_by_building, same_building, BuildingAddress, BuildingGroups};
pub use identifier::BuildingIdentifier;
pub use normalizer::normalize_for_matching;
pub use validator::{check_identifier, is_valid_building_identifier};

/// Version of the core library, for front ends that report it
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
