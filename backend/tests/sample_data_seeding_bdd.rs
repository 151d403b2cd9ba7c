//! Behaviour tests for sample data seeding against embedded PostgreSQL.
//!
//! Scenarios apply named seeds from the built-in registry and check both the
//! reported outcome and the rows left behind.

use std::sync::Arc;

use marketplace::domain::ports::SeedingResult;
use marketplace::domain::{SampleDataSeedingError, SampleDataSeeder};
use marketplace::outbound::persistence::{DbPool, DieselSampleDataSeedRepository, PoolConfig};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use sample_data::SeedRegistry;
use tokio::runtime::Runtime;

mod support;

use support::{TestDatabase, test_database};

/// Wrapper for non-Clone types to enable storage in `Slot`.
#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

#[derive(Clone)]
struct DatabaseHandle(Arc<TestDatabase>);

type Seeder = SampleDataSeeder<DieselSampleDataSeedRepository>;

#[derive(Default, ScenarioState)]
struct SeedingWorld {
    runtime: Slot<RuntimeHandle>,
    seeder: Slot<Seeder>,
    database: Slot<DatabaseHandle>,
    last_result: Slot<Arc<Result<SeedingResult, SampleDataSeedingError>>>,
    skipped: Slot<bool>,
}

impl SeedingWorld {
    fn setup_fresh_database(&self) {
        let Some(database) = test_database() else {
            self.skipped.set(true);
            return;
        };
        let runtime = Runtime::new().expect("create runtime");
        let config = PoolConfig::new(database.url())
            .with_max_size(2)
            .with_min_idle(Some(1));
        let pool = runtime
            .block_on(async { DbPool::new(config).await })
            .expect("create pool");

        self.seeder.set(SampleDataSeeder::new(Arc::new(
            DieselSampleDataSeedRepository::new(pool),
        )));
        self.runtime.set(RuntimeHandle(Arc::new(runtime)));
        self.database.set(DatabaseHandle(Arc::new(database)));
    }

    fn is_skipped(&self) -> bool {
        if self.skipped.get().unwrap_or(false) {
            eprintln!("SKIP-TEST-CLUSTER: scenario skipped");
            return true;
        }
        false
    }

    fn apply(&self, seed_name: &str) {
        if self.is_skipped() {
            return;
        }
        let runtime = self.runtime.get().expect("runtime");
        let seeder = self.seeder.get().expect("seeder");
        let registry = SeedRegistry::builtin();
        let result = runtime
            .0
            .block_on(seeder.seed_from_registry(&registry, seed_name))
            .map(|outcome| outcome.result);
        self.last_result.set(Arc::new(result));
    }

    fn count(&self, table: &str) -> i64 {
        let database = self.database.get().expect("database");
        database.0.count(table).expect("count rows")
    }

    fn assert_result(&self, expected: SeedingResult) {
        if self.is_skipped() {
            return;
        }
        let result = self.last_result.get().expect("seed result should be set");
        match result.as_ref() {
            Ok(actual) => assert_eq!(*actual, expected),
            Err(err) => panic!("expected {expected:?}, got error: {err}"),
        }
    }
}

#[fixture]
fn world() -> SeedingWorld {
    SeedingWorld::default()
}

#[given("a fresh marketplace database")]
fn a_fresh_marketplace_database(world: &SeedingWorld) {
    world.setup_fresh_database();
}

#[when("the seed {seed_name} is applied")]
fn the_seed_is_applied(world: &SeedingWorld, seed_name: String) {
    world.apply(&seed_name);
}

#[then("the run is reported as applied")]
fn the_run_is_reported_as_applied(world: &SeedingWorld) {
    world.assert_result(SeedingResult::Applied);
}

#[then("the run is reported as already seeded")]
fn the_run_is_reported_as_already_seeded(world: &SeedingWorld) {
    world.assert_result(SeedingResult::AlreadySeeded);
}

#[then("the database holds {clients} clients and {providers} providers")]
fn the_database_holds(world: &SeedingWorld, clients: String, providers: String) {
    if world.is_skipped() {
        return;
    }
    let clients: i64 = clients.parse().expect("client count");
    let providers: i64 = providers.parse().expect("provider count");

    assert_eq!(world.count("clients"), clients);
    assert_eq!(world.count("service_providers"), providers);
    assert_eq!(world.count("users"), clients + providers);
}

#[then("every fixed category is present")]
fn every_fixed_category_is_present(world: &SeedingWorld) {
    if world.is_skipped() {
        return;
    }
    let expected = i64::try_from(sample_data::fixtures::categories().len()).expect("count fits");

    assert_eq!(world.count("service_categories"), expected);
}

#[scenario(
    path = "tests/features/sample_data_seeding.feature",
    name = "First application inserts generated rows"
)]
fn first_application_inserts_generated_rows(world: SeedingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/sample_data_seeding.feature",
    name = "Reapplying a seed changes nothing"
)]
fn reapplying_a_seed_changes_nothing(world: SeedingWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/sample_data_seeding.feature",
    name = "Different seeds are independent"
)]
fn different_seeds_are_independent(world: SeedingWorld) {
    let _ = world;
}
