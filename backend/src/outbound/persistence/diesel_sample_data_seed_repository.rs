//! PostgreSQL-backed sample data seeding adapter.
//!
//! This adapter implements the `SampleDataSeedRepository` port, applying a
//! generated dataset within a single transaction. The run record is inserted
//! first; when the key already exists nothing else is written.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use sample_data::SampleDataset;

use crate::domain::ports::{
    SampleDataSeedRepository, SampleDataSeedRepositoryError, SampleDataSeedRequest, SeedingResult,
};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::{
    NewAchievementRow, NewClientRow, NewLanguageRow, NewPartnerRow, NewSampleDataRunRow,
    NewServiceCategoryRow, NewServiceProviderRow, NewServiceRow, NewUserRow,
};
use super::pool::DbPool;
use super::schema::{
    achievements, clients, languages, sample_data_runs, service_categories, service_providers,
    services, third_party_partners, users,
};

/// Diesel-backed implementation of the sample data seeding repository.
#[derive(Clone)]
pub struct DieselSampleDataSeedRepository {
    pool: DbPool,
}

impl DieselSampleDataSeedRepository {
    /// Create a new seeding repository with the given connection pool.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use marketplace::outbound::persistence::{
    ///     DbPool, DieselSampleDataSeedRepository, PoolConfig,
    /// };
    ///
    /// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = DbPool::new(PoolConfig::new("postgres://localhost")).await?;
    /// let repository = DieselSampleDataSeedRepository::new(pool);
    /// # let _ = repository;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Failures raised inside the seeding transaction.
#[derive(Debug)]
enum SeedTransactionError {
    Diesel(diesel::result::Error),
    MissingReference(String),
}

impl From<diesel::result::Error> for SeedTransactionError {
    fn from(error: diesel::result::Error) -> Self {
        Self::Diesel(error)
    }
}

impl From<SeedTransactionError> for SampleDataSeedRepositoryError {
    fn from(error: SeedTransactionError) -> Self {
        match error {
            SeedTransactionError::Diesel(error) => map_diesel_error(error).into(),
            SeedTransactionError::MissingReference(message) => Self::query(message),
        }
    }
}

fn lookup(ids: &HashMap<String, i32>, key: &str, what: &str) -> Result<i32, SeedTransactionError> {
    ids.get(key).copied().ok_or_else(|| {
        SeedTransactionError::MissingReference(format!("seeded {what} `{key}` was not stored"))
    })
}

/// Insert lookup rows, skipping any whose unique name already exists.
async fn insert_fixtures(
    conn: &mut AsyncPgConnection,
    dataset: &SampleDataset,
) -> Result<(), SeedTransactionError> {
    let category_rows: Vec<NewServiceCategoryRow> = dataset
        .categories
        .iter()
        .map(|category| NewServiceCategoryRow {
            name: category.name.clone(),
            description: Some(category.description.clone()),
            icon: Some(category.icon.clone()),
        })
        .collect();
    diesel::insert_into(service_categories::table)
        .values(&category_rows)
        .on_conflict(service_categories::name)
        .do_nothing()
        .execute(conn)
        .await?;

    let language_rows: Vec<NewLanguageRow> = dataset
        .languages
        .iter()
        .map(|language| NewLanguageRow {
            code: language.code.clone(),
            name: language.name.clone(),
        })
        .collect();
    diesel::insert_into(languages::table)
        .values(&language_rows)
        .on_conflict(languages::code)
        .do_nothing()
        .execute(conn)
        .await?;

    let achievement_rows: Vec<NewAchievementRow> = dataset
        .achievements
        .iter()
        .map(|achievement| NewAchievementRow {
            name: achievement.name.clone(),
            description: achievement.description.clone(),
            points: achievement.points,
            icon: None,
        })
        .collect();
    diesel::insert_into(achievements::table)
        .values(&achievement_rows)
        .on_conflict(achievements::name)
        .do_nothing()
        .execute(conn)
        .await?;

    let partner_rows: Vec<NewPartnerRow> = dataset
        .partners
        .iter()
        .map(|partner| NewPartnerRow {
            name: partner.name.clone(),
            partner_type: partner.partner_type.clone(),
            website: Some(partner.website.clone()),
            active: true,
        })
        .collect();
    diesel::insert_into(third_party_partners::table)
        .values(&partner_rows)
        .on_conflict(third_party_partners::name)
        .do_nothing()
        .execute(conn)
        .await?;

    Ok(())
}

/// Insert generated accounts and return their ids keyed by username.
async fn insert_users(
    conn: &mut AsyncPgConnection,
    dataset: &SampleDataset,
) -> Result<HashMap<String, i32>, SeedTransactionError> {
    let people = dataset
        .clients
        .iter()
        .map(|client| &client.person)
        .chain(dataset.providers.iter().map(|provider| &provider.person));
    let user_rows: Vec<NewUserRow> = people
        .map(|person| NewUserRow {
            username: person.username.clone(),
            email: person.email.clone(),
            full_name: person.full_name.clone(),
            role: person.role.as_str().to_owned(),
            phone: person.phone.clone(),
        })
        .collect();
    if user_rows.is_empty() {
        return Ok(HashMap::new());
    }

    let usernames: Vec<String> = user_rows.iter().map(|row| row.username.clone()).collect();
    diesel::insert_into(users::table)
        .values(&user_rows)
        .on_conflict_do_nothing()
        .execute(conn)
        .await?;

    let ids: Vec<(String, i32)> = users::table
        .filter(users::username.eq_any(usernames))
        .select((users::username, users::id))
        .load(conn)
        .await?;
    Ok(ids.into_iter().collect())
}

/// Insert profiles and services for the generated accounts.
async fn insert_profiles(
    conn: &mut AsyncPgConnection,
    dataset: &SampleDataset,
    user_ids: &HashMap<String, i32>,
) -> Result<(), SeedTransactionError> {
    let client_rows = dataset
        .clients
        .iter()
        .map(|client| {
            Ok(NewClientRow {
                user_id: lookup(user_ids, &client.person.username, "user")?,
                address: Some(client.address.clone()),
            })
        })
        .collect::<Result<Vec<_>, SeedTransactionError>>()?;
    if !client_rows.is_empty() {
        diesel::insert_into(clients::table)
            .values(&client_rows)
            .execute(conn)
            .await?;
    }

    if dataset.providers.is_empty() {
        return Ok(());
    }
    let provider_rows = dataset
        .providers
        .iter()
        .map(|provider| {
            Ok(NewServiceProviderRow {
                user_id: lookup(user_ids, &provider.person.username, "user")?,
                business_name: provider.business_name.clone(),
                description: Some(provider.description.clone()),
                hourly_rate_cents: Some(provider.hourly_rate_cents),
                rating: provider.rating,
                verified: provider.verified,
            })
        })
        .collect::<Result<Vec<_>, SeedTransactionError>>()?;
    let provider_ids: HashMap<i32, i32> = diesel::insert_into(service_providers::table)
        .values(&provider_rows)
        .returning((service_providers::user_id, service_providers::id))
        .get_results::<(i32, i32)>(conn)
        .await?
        .into_iter()
        .collect();

    let category_ids: HashMap<String, i32> = service_categories::table
        .select((service_categories::name, service_categories::id))
        .load::<(String, i32)>(conn)
        .await?
        .into_iter()
        .collect();

    let mut service_rows = Vec::new();
    for provider in &dataset.providers {
        let user_id = lookup(user_ids, &provider.person.username, "user")?;
        let provider_id = provider_ids.get(&user_id).copied().ok_or_else(|| {
            SeedTransactionError::MissingReference(format!(
                "seeded provider `{}` was not stored",
                provider.business_name
            ))
        })?;
        for service in &provider.services {
            service_rows.push(NewServiceRow {
                provider_id,
                category_id: lookup(&category_ids, &service.category, "category")?,
                name: service.name.clone(),
                description: Some(service.description.clone()),
                price_cents: service.price_cents,
                duration_minutes: service.duration_minutes,
            });
        }
    }
    if !service_rows.is_empty() {
        diesel::insert_into(services::table)
            .values(&service_rows)
            .execute(conn)
            .await?;
    }

    Ok(())
}

#[async_trait]
impl SampleDataSeedRepository for DieselSampleDataSeedRepository {
    async fn seed_sample_data(
        &self,
        request: SampleDataSeedRequest,
    ) -> Result<SeedingResult, SampleDataSeedRepositoryError> {
        let SampleDataSeedRequest {
            seed_key,
            seed,
            client_count,
            provider_count,
            dataset,
        } = request;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let result = conn
            .transaction::<_, SeedTransactionError, _>(|conn| {
                async move {
                    let new_run = NewSampleDataRunRow {
                        seed_key: seed_key.as_str(),
                        seed,
                        client_count,
                        provider_count,
                    };

                    let rows_affected = diesel::insert_into(sample_data_runs::table)
                        .values(&new_run)
                        .on_conflict(sample_data_runs::seed_key)
                        .do_nothing()
                        .execute(conn)
                        .await?;

                    if rows_affected == 0 {
                        return Ok(SeedingResult::AlreadySeeded);
                    }

                    insert_fixtures(conn, &dataset).await?;
                    let user_ids = insert_users(conn, &dataset).await?;
                    insert_profiles(conn, &dataset, &user_ids).await?;

                    Ok(SeedingResult::Applied)
                }
                .scope_boxed()
            })
            .await?;

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for seed transaction error mapping.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_reference_maps_to_query_error() {
        let error = SampleDataSeedRepositoryError::from(SeedTransactionError::MissingReference(
            "seeded user `ada` was not stored".to_owned(),
        ));

        assert!(matches!(
            error,
            SampleDataSeedRepositoryError::Query { message } if message.contains("ada")
        ));
    }

    #[rstest]
    fn lookup_reports_missing_keys() {
        let ids = HashMap::from([("ada".to_owned(), 7)]);

        assert_eq!(lookup(&ids, "ada", "user").ok(), Some(7));
        assert!(matches!(
            lookup(&ids, "grace", "user"),
            Err(SeedTransactionError::MissingReference(_))
        ));
    }
}
