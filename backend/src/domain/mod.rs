//! Domain records, ports and services.
//!
//! Purpose: define the marketplace records exposed over HTTP, the ports the
//! inbound and outbound adapters meet at, and the thin services between them.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Resource / ResourceKind: per-table metadata shared by generic code.
//! - RecordService: one-query service functions per resource.

pub mod echo;
pub mod error;
pub mod ports;
pub mod records;
pub mod record_service;
pub mod relation_reads;
pub mod relations;
pub mod resource;
pub mod sample_data;
pub mod trace_id;

pub use self::echo::{ECHO_PREFIX, EchoResponder};
pub use self::error::{Error, ErrorCode};
pub use self::record_service::RecordService;
pub use self::relation_reads::RecordRelationQuery;
pub use self::resource::{ListOrder, Resource, ResourceKind, ResourceVisitor, visit_resources};
pub use self::sample_data::{SampleDataSeedOutcome, SampleDataSeeder, SampleDataSeedingError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
