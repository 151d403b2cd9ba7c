//! Deterministic marketplace sample data for demonstration databases.
//!
//! This crate generates believable, reproducible marketplace rows from named
//! seeds. It is independent of backend domain types so the backend can
//! depend on it without cycles.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - A built-in seed registry and JSON registries loaded from disk
//! - Fixed reference rows (categories, languages, achievements, partners)
//! - Deterministic client and provider generation using named seeds
//!
//! # Example
//!
//! ```
//! use sample_data::{SeedRegistry, generate_dataset};
//!
//! let json = r#"{
//!     "version": 1,
//!     "seeds": [{"name": "test-seed", "seed": 42, "clientCount": 3, "providerCount": 1}]
//! }"#;
//!
//! let registry = SeedRegistry::from_json(json).expect("valid registry");
//! let seed_def = registry.find_seed("test-seed").expect("seed exists");
//! let dataset = generate_dataset(seed_def).expect("generation succeeds");
//!
//! assert_eq!(dataset.clients.len(), 3);
//! ```

mod error;
pub mod fixtures;
mod generator;
mod registry;
mod seed;
mod validation;

pub use error::{GenerationError, RegistryError};
pub use generator::generate_dataset;
pub use registry::{SeedDefinition, SeedRegistry};
pub use seed::{
    AchievementSeed, CategorySeed, ClientSeed, LanguageSeed, PartnerSeed, PersonSeed,
    ProviderSeed, RoleSeed, SampleDataset, ServiceSeed,
};
pub use validation::{USERNAME_MAX, USERNAME_MIN, is_valid_username};
