use ipdns_domain::{Answer, Query, ResolveError, ResponseCode, ZoneConfig};
use std::sync::Arc;
use tracing::{info, warn};

use super::ZoneResolver;

/// Builds the reply for one message addressed to a zone.
///
/// Every question is resolved in order and a failing question does not
/// stop the ones after it. Records are concatenated in question order.
/// Any record at all makes the reply `NOERROR`; otherwise `NXDOMAIN` wins
/// over `NOTIMP`.
pub struct AnswerQueryUseCase {
    resolver: ZoneResolver,
}

impl AnswerQueryUseCase {
    pub fn new(zone: Arc<ZoneConfig>) -> Self {
        Self {
            resolver: ZoneResolver::new(zone),
        }
    }

    pub fn zone(&self) -> &ZoneConfig {
        self.resolver.zone()
    }

    pub fn execute(&self, query: &Query) -> Answer {
        let id = format!("{:04x}", query.id);
        let remote = query
            .remote
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| "-".to_string());

        let mut records = Vec::new();
        let mut name_error = false;
        let mut not_implemented = false;

        for question in &query.questions {
            info!(
                id = %id,
                remote = %remote,
                qtype = %question.qtype,
                name = %question.name,
                "request"
            );

            match self.resolver.resolve(question) {
                Ok(mut resolved) => records.append(&mut resolved),
                Err(e) => {
                    warn!(id = %id, error = %e, "question not answered");
                    match e {
                        ResolveError::InvalidName(_) => name_error = true,
                        ResolveError::UnsupportedClass(_) | ResolveError::UnsupportedType(_) => {
                            not_implemented = true
                        }
                    }
                }
            }
        }

        let response_code = if !records.is_empty() {
            ResponseCode::NoError
        } else if name_error {
            ResponseCode::NXDomain
        } else if not_implemented {
            ResponseCode::NotImp
        } else {
            ResponseCode::NoError
        };

        Answer::new(query.id, response_code, records)
    }
}
