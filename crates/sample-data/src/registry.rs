//! Seed registry types and JSON parsing.
//!
//! A registry holds named seed definitions. The built-in registry ships with
//! the crate; custom registries load from JSON files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryError;

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// A registry of named seed definitions.
///
/// # Example
///
/// ```
/// use sample_data::SeedRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "seeds": [{"name": "test", "seed": 42, "clientCount": 5, "providerCount": 2}]
/// }"#;
///
/// let registry = SeedRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.seeds().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRegistry {
    version: u32,
    seeds: Vec<SeedDefinition>,
}

impl SeedRegistry {
    /// Returns the registry compiled into the crate.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            seeds: vec![
                SeedDefinition::new("harbour-lights", 2026, 8, 5),
                SeedDefinition::new("quiet-street", 7, 3, 2),
            ],
        }
    }

    /// Parses a seed registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed
    /// - Required fields are missing
    /// - The version is unsupported
    /// - The seeds array is empty or repeats a name
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawSeedRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a seed registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.seeds.is_empty() {
            return Err(RegistryError::EmptySeeds);
        }

        let mut names = HashSet::new();
        let mut seeds = Vec::with_capacity(raw.seeds.len());
        for s in raw.seeds {
            if !names.insert(s.name.clone()) {
                return Err(RegistryError::DuplicateSeed { name: s.name });
            }
            seeds.push(SeedDefinition {
                name: s.name,
                seed: s.seed,
                client_count: s.client_count,
                provider_count: s.provider_count,
            });
        }

        Ok(Self {
            version: raw.version,
            seeds,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns all seed definitions.
    #[must_use]
    pub fn seeds(&self) -> &[SeedDefinition] {
        &self.seeds
    }

    /// Finds a seed definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SeedNotFound`] if no seed with the given name
    /// exists.
    pub fn find_seed(&self, name: &str) -> Result<&SeedDefinition, RegistryError> {
        self.seeds
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::SeedNotFound {
                name: name.to_owned(),
            })
    }
}

/// A named seed definition for deterministic dataset generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDefinition {
    name: String,
    seed: u64,
    client_count: usize,
    provider_count: usize,
}

impl SeedDefinition {
    /// Creates a seed definition.
    #[must_use]
    pub fn new(name: &str, seed: u64, client_count: usize, provider_count: usize) -> Self {
        Self {
            name: name.to_owned(),
            seed,
            client_count,
            provider_count,
        }
    }

    /// Returns the seed name, which also keys the run record.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the RNG seed value.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the number of clients to generate.
    #[must_use]
    pub const fn client_count(&self) -> usize {
        self.client_count
    }

    /// Returns the number of providers to generate.
    #[must_use]
    pub const fn provider_count(&self) -> usize {
        self.provider_count
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedRegistry {
    version: u32,
    seeds: Vec<RawSeedDefinition>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSeedDefinition {
    name: String,
    seed: u64,
    client_count: usize,
    provider_count: usize,
}
