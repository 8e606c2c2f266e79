use std::fmt;

/// Query/record type as seen on the wire.
///
/// Only A, NS and SOA are answered; every other code is carried through as
/// `Unknown` and printed in the generic `TYPEn` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    SOA,
    Unknown(u16),
}

impl RecordType {
    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => RecordType::A,
            2 => RecordType::NS,
            6 => RecordType::SOA,
            other => RecordType::Unknown(other),
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::A => f.write_str("A"),
            RecordType::NS => f.write_str("NS"),
            RecordType::SOA => f.write_str("SOA"),
            RecordType::Unknown(code) => write!(f, "TYPE{}", code),
        }
    }
}
