use ipdns_domain::fqdn::{is_in_zone, label_count};
use ipdns_domain::{Answer, Query, ResponseCode, ZoneConfig};
use std::sync::Arc;
use tracing::warn;

use crate::use_cases::AnswerQueryUseCase;

/// Zones served behind one socket, routed by the first question's name.
pub struct ZoneCatalog {
    // Most specific domain first.
    zones: Vec<AnswerQueryUseCase>,
}

impl ZoneCatalog {
    pub fn new(zones: Vec<Arc<ZoneConfig>>) -> Self {
        let mut zones: Vec<AnswerQueryUseCase> =
            zones.into_iter().map(AnswerQueryUseCase::new).collect();
        zones.sort_by_key(|z| std::cmp::Reverse(label_count(&z.zone().domain)));
        Self { zones }
    }

    /// Zone with the longest domain containing `name`.
    pub fn find(&self, name: &str) -> Option<&AnswerQueryUseCase> {
        self.zones
            .iter()
            .find(|zone| is_in_zone(name, &zone.zone().domain))
    }

    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(|z| z.zone().domain.as_str())
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Answer `query` with the zone owning its first question, or refuse it.
    ///
    /// Every question in the message goes to that one zone, so a later
    /// question naming a sibling zone on the same socket is answered NXDOMAIN.
    pub fn answer(&self, query: &Query) -> Answer {
        let Some(first) = query.questions.first() else {
            warn!(id = %format!("{:04x}", query.id), "message without question refused");
            return Answer::empty(query.id, ResponseCode::Refused);
        };

        match self.find(&first.name) {
            Some(zone) => zone.execute(query),
            None => {
                warn!(
                    id = %format!("{:04x}", query.id),
                    name = %first.name,
                    "no zone for name, refused"
                );
                Answer::empty(query.id, ResponseCode::Refused)
            }
        }
    }
}
