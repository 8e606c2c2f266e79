use thiserror::Error;

use crate::{RecordClass, RecordType};

/// Why a single question produced no records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unsupported qclass: {0}")]
    UnsupportedClass(RecordClass),

    #[error("unsupported qtype: {0}")]
    UnsupportedType(RecordType),

    #[error("invalid domain name: {0}")]
    InvalidName(String),
}

