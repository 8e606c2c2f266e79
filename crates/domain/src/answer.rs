use std::fmt;

use super::ResourceRecord;

/// Status of a reply, limited to the codes this server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    NXDomain,
    NotImp,
    Refused,
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of answering one message. Built fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub id: u16,
    pub response_code: ResponseCode,
    pub records: Vec<ResourceRecord>,
}

impl Answer {
    pub fn new(id: u16, response_code: ResponseCode, records: Vec<ResourceRecord>) -> Self {
        Self {
            id,
            response_code,
            records,
        }
    }

    /// Reply with no records, used for messages no zone accepts.
    pub fn empty(id: u16, response_code: ResponseCode) -> Self {
        Self::new(id, response_code, Vec::new())
    }
}
