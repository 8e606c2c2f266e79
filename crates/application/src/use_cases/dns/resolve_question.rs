use ipdns_domain::fqdn::strip_zone_suffix;
use ipdns_domain::{
    Question, RecordClass, RecordType, ResolveError, ResourceRecord, SoaData, ZoneConfig,
};
use std::net::Ipv4Addr;
use std::sync::Arc;

/// Synthesizes records for one zone. Holds no mutable state, so a single
/// instance is shared by every handler of the zone.
#[derive(Debug, Clone)]
pub struct ZoneResolver {
    zone: Arc<ZoneConfig>,
}

impl ZoneResolver {
    pub fn new(zone: Arc<ZoneConfig>) -> Self {
        Self { zone }
    }

    pub fn zone(&self) -> &ZoneConfig {
        &self.zone
    }

    pub fn resolve(&self, question: &Question) -> Result<Vec<ResourceRecord>, ResolveError> {
        resolve(&self.zone, question)
    }
}

/// Answer a single question from the zone settings alone.
///
/// - A: the labels in front of the zone domain are the address.
/// - NS: configured nameservers in order, or the zone itself when none are set.
/// - SOA: one record built from the zone's SOA fields.
///
/// Non-IN classes and every other type are rejected.
pub fn resolve(zone: &ZoneConfig, question: &Question) -> Result<Vec<ResourceRecord>, ResolveError> {
    if question.qclass != RecordClass::IN {
        return Err(ResolveError::UnsupportedClass(question.qclass));
    }

    match question.qtype {
        RecordType::A => resolve_a(zone, &question.name).map(|record| vec![record]),
        RecordType::NS => Ok(resolve_ns(zone, &question.name)),
        RecordType::SOA => Ok(vec![resolve_soa(zone, &question.name)]),
        other => Err(ResolveError::UnsupportedType(other)),
    }
}

fn resolve_a(zone: &ZoneConfig, name: &str) -> Result<ResourceRecord, ResolveError> {
    let address = strip_zone_suffix(name, &zone.domain)
        .and_then(|label| label.parse::<Ipv4Addr>().ok())
        .filter(|addr| !addr.is_unspecified())
        .ok_or_else(|| ResolveError::InvalidName(name.to_string()))?;

    Ok(ResourceRecord::a(name, zone.ttl, address))
}

fn resolve_ns(zone: &ZoneConfig, name: &str) -> Vec<ResourceRecord> {
    if zone.nameservers.is_empty() {
        return vec![ResourceRecord::ns(name, zone.ttl, zone.domain.as_str())];
    }

    zone.nameservers
        .iter()
        .map(|ns| ResourceRecord::ns(name, zone.ttl, ns.as_str()))
        .collect()
}

fn resolve_soa(zone: &ZoneConfig, name: &str) -> ResourceRecord {
    ResourceRecord::soa(
        name,
        zone.ttl,
        SoaData {
            authority: zone.domain.clone(),
            mbox: zone.mbox.clone(),
            serial: zone.serial,
            refresh: zone.refresh,
            retry: zone.retry,
            expire: zone.expire,
            minttl: zone.minttl,
        },
    )
}
