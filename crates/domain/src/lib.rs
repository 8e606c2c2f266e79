//! ipdns domain layer: configuration, zone settings and DNS message types.
pub mod answer;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod fqdn;
pub mod listen_spec;
pub mod zone_config;

pub use answer::{Answer, ResponseCode};
pub use config::{CliOverrides, Config, ConfigError, Protocol};
pub use dns_query::{Query, Question};
pub use dns_record::{RecordClass, RecordData, RecordType, ResourceRecord, SoaData};
pub use errors::ResolveError;
pub use listen_spec::ListenSpec;
pub use zone_config::ZoneConfig;
