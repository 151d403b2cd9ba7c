//! Deterministic dataset generation from seed definitions.
//!
//! The same seed definition always produces an identical dataset.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::address::raw::{BuildingNumber, CityName, StreetName};
use fake::faker::company::raw::CompanyName;
use fake::faker::name::raw::{FirstName, LastName};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::EN;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;
use crate::fixtures::{self, SERVICE_TEMPLATES, ServiceTemplate};
use crate::registry::SeedDefinition;
use crate::seed::{ClientSeed, PersonSeed, ProviderSeed, RoleSeed, SampleDataset, ServiceSeed};
use crate::validation::{USERNAME_MAX, is_valid_username, sanitize_username};

/// Maximum number of attempts to generate a unique username.
const MAX_USERNAME_ATTEMPTS: usize = 100;

/// Ratings handed out to generated providers.
const RATINGS: &[f64] = &[3.8, 4.1, 4.3, 4.5, 4.6, 4.8, 4.9, 5.0];

const MIN_SERVICES: usize = 1;
const MAX_SERVICES: usize = 3;

/// Generates a complete sample dataset from a seed definition.
///
/// Fixed reference rows come from the crate fixtures. Clients and providers
/// are generated from a `ChaCha8Rng` seeded with the definition's seed value.
///
/// # Errors
///
/// Returns [`GenerationError::UsernameGenerationFailed`] if a unique username
/// cannot be produced within the retry limit.
///
/// # Example
///
/// ```
/// use sample_data::{SeedDefinition, generate_dataset};
///
/// let seed_def = SeedDefinition::new("test", 42, 3, 2);
/// let dataset = generate_dataset(&seed_def).expect("generated");
///
/// assert_eq!(dataset.clients.len(), 3);
/// assert_eq!(dataset.providers.len(), 2);
/// // Same seed produces an identical dataset
/// assert_eq!(dataset, generate_dataset(&seed_def).expect("generated"));
/// ```
pub fn generate_dataset(seed_def: &SeedDefinition) -> Result<SampleDataset, GenerationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed_def.seed());
    let mut usernames = HashSet::new();

    let clients = (0..seed_def.client_count())
        .map(|_| generate_client(&mut rng, &mut usernames))
        .collect::<Result<Vec<_>, _>>()?;
    let providers = (0..seed_def.provider_count())
        .map(|_| generate_provider(&mut rng, &mut usernames))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SampleDataset {
        categories: fixtures::categories(),
        languages: fixtures::languages(),
        achievements: fixtures::achievements(),
        partners: fixtures::partners(),
        clients,
        providers,
    })
}

fn generate_client(
    rng: &mut ChaCha8Rng,
    usernames: &mut HashSet<String>,
) -> Result<ClientSeed, GenerationError> {
    let person = generate_person(rng, usernames, RoleSeed::Client)?;
    let number: String = BuildingNumber(EN).fake_with_rng(rng);
    let street: String = StreetName(EN).fake_with_rng(rng);
    let city: String = CityName(EN).fake_with_rng(rng);

    Ok(ClientSeed {
        person,
        address: format!("{number} {street}, {city}"),
    })
}

fn generate_provider(
    rng: &mut ChaCha8Rng,
    usernames: &mut HashSet<String>,
) -> Result<ProviderSeed, GenerationError> {
    let person = generate_person(rng, usernames, RoleSeed::Provider)?;
    let business_name: String = CompanyName(EN).fake_with_rng(rng);
    let city: String = CityName(EN).fake_with_rng(rng);
    let service_count = rng.random_range(MIN_SERVICES..=MAX_SERVICES);
    let services = SERVICE_TEMPLATES
        .choose_multiple(rng, service_count)
        .copied()
        .collect::<Vec<_>>()
        .into_iter()
        .map(|template| generate_service(rng, template))
        .collect();

    Ok(ProviderSeed {
        person,
        description: format!("{business_name} serving {city} and nearby areas"),
        business_name,
        hourly_rate_cents: rng.random_range(25..=95) * 100,
        rating: RATINGS.choose(rng).copied().unwrap_or(4.5),
        verified: rng.random_ratio(3, 4),
        services,
    })
}

fn generate_service(rng: &mut ChaCha8Rng, template: ServiceTemplate) -> ServiceSeed {
    ServiceSeed {
        category: template.category.to_owned(),
        name: template.name.to_owned(),
        description: template.description.to_owned(),
        price_cents: template.base_price_cents + rng.random_range(0..=20) * 100,
        duration_minutes: template.duration_minutes,
    }
}

fn generate_person(
    rng: &mut ChaCha8Rng,
    usernames: &mut HashSet<String>,
    role: RoleSeed,
) -> Result<PersonSeed, GenerationError> {
    for _ in 0..MAX_USERNAME_ATTEMPTS {
        let first: String = FirstName(EN).fake_with_rng(rng);
        let last: String = LastName(EN).fake_with_rng(rng);
        let suffix: u16 = rng.random_range(10..100);
        let candidate: String = format!("{}_{suffix}", sanitize_username(&format!("{first} {last}")))
            .chars()
            .take(USERNAME_MAX)
            .collect();

        if !is_valid_username(&candidate) || usernames.contains(&candidate) {
            continue;
        }
        usernames.insert(candidate.clone());

        let phone = if rng.random_ratio(4, 5) {
            Some(PhoneNumber(EN).fake_with_rng(rng))
        } else {
            None
        };

        return Ok(PersonSeed {
            email: format!("{candidate}@example.com"),
            username: candidate,
            full_name: format!("{first} {last}"),
            phone,
            role,
        });
    }

    Err(GenerationError::UsernameGenerationFailed {
        max_attempts: MAX_USERNAME_ATTEMPTS,
    })
}
