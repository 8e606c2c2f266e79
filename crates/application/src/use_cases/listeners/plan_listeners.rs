use ipdns_domain::{Config, ConfigError, ListenSpec, ZoneConfig};
use std::collections::HashSet;
use std::sync::Arc;

/// One socket to bind and the zones answered on it.
#[derive(Debug, Clone)]
pub struct ListenerPlan {
    pub spec: ListenSpec,
    pub zones: Vec<Arc<ZoneConfig>>,
}

/// Expand `protocols x domains` into the listeners to start.
///
/// Pairs sharing an `(address, port, protocol)` binding end up in one plan.
/// The same domain twice on one binding is a [`ConfigError::ConflictingBinding`].
/// Validation runs first, so nothing is returned for a config that must
/// not start.
pub fn plan_listeners(config: &Config) -> Result<Vec<ListenerPlan>, ConfigError> {
    config.validate()?;

    let zones: Vec<Arc<ZoneConfig>> = config
        .server
        .domains
        .iter()
        .map(|domain| Arc::new(ZoneConfig::new(domain, config)))
        .collect();

    let mut plans: Vec<ListenerPlan> = Vec::new();
    let mut seen = HashSet::new();

    for protocol in &config.server.protocols {
        let spec = ListenSpec::new(
            config.server.bind_address.clone(),
            config.server.port,
            *protocol,
        );
        spec.socket_addr()?;

        for zone in &zones {
            if !seen.insert((spec.clone(), zone.domain.to_ascii_lowercase())) {
                return Err(ConfigError::ConflictingBinding {
                    binding: spec.to_string(),
                    domain: zone.domain.clone(),
                });
            }

            match plans.iter_mut().find(|plan| plan.spec == spec) {
                Some(plan) => plan.zones.push(Arc::clone(zone)),
                None => plans.push(ListenerPlan {
                    spec: spec.clone(),
                    zones: vec![Arc::clone(zone)],
                }),
            }
        }
    }

    Ok(plans)
}
