use super::{RecordClass, RecordType};
use std::net::SocketAddr;

/// One entry of a message's question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qclass: RecordClass,
    pub qtype: RecordType,
}

impl Question {
    pub fn new(name: impl Into<String>, qclass: RecordClass, qtype: RecordType) -> Self {
        Self {
            name: name.into(),
            qclass,
            qtype,
        }
    }

    /// Internet-class question, the only class that is served.
    pub fn internet(name: impl Into<String>, qtype: RecordType) -> Self {
        Self::new(name, RecordClass::IN, qtype)
    }
}

/// A decoded request: transaction id plus questions in received order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub id: u16,
    pub questions: Vec<Question>,
    /// Peer the message came from, when known. Only used in diagnostics.
    pub remote: Option<SocketAddr>,
}

impl Query {
    pub fn new(id: u16, questions: Vec<Question>) -> Self {
        Self {
            id,
            questions,
            remote: None,
        }
    }

    pub fn with_remote(mut self, remote: SocketAddr) -> Self {
        self.remote = Some(remote);
        self
    }
}
