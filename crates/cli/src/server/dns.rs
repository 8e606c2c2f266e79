use ipdns_application::use_cases::plan_listeners;
use ipdns_domain::Config;
use ipdns_infrastructure::dns::serve_listeners;
use tracing::info;

/// Start one listener per configured binding and block until the first
/// fatal listener error.
pub async fn start_dns_server(config: &Config) -> anyhow::Result<()> {
    let plans = plan_listeners(config)?;

    info!(
        listeners = plans.len(),
        domains = config.server.domains.len(),
        "DNS server starting"
    );

    serve_listeners(plans).await?;

    info!("All DNS listeners stopped");
    Ok(())
}
