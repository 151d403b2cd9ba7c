//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod message_responder;
mod record_ports;
mod record_repository;
mod relation_query;
mod sample_data_seed_repository;

#[cfg(test)]
pub use message_responder::MockMessageResponder;
pub use message_responder::MessageResponder;
pub use record_ports::{RecordPorts, in_memory_record_ports};
pub use record_repository::{InMemoryRecordRepository, RecordRepository, RecordRepositoryError};
#[cfg(test)]
pub use relation_query::MockRelationQuery;
pub use relation_query::{FixtureRelationQuery, RelationQuery, RelationQueryError};
#[cfg(test)]
pub use sample_data_seed_repository::MockSampleDataSeedRepository;
pub use sample_data_seed_repository::{
    SampleDataSeedRepository, SampleDataSeedRepositoryError, SampleDataSeedRequest, SeedingResult,
};

#[cfg(test)]
mod tests;
