use clap::Parser;
use ipdns_domain::{CliOverrides, Protocol};
use tracing::{error, info};

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "ipdns")]
#[command(version)]
#[command(about = "Authoritative DNS server answering A queries from the address embedded in the name")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", env = "IPDNS_CONFIG")]
    config: Option<String>,

    /// Listen address
    #[arg(long, env = "IPDNS_ADDR")]
    addr: Option<String>,

    /// Listen port
    #[arg(long, env = "IPDNS_PORT")]
    port: Option<u16>,

    /// Listen protocol list (tcp,udp)
    #[arg(long, value_delimiter = ',', env = "IPDNS_PROTO")]
    proto: Option<Vec<Protocol>>,

    /// Domain list
    #[arg(long, value_delimiter = ',', env = "IPDNS_DOMAIN")]
    domain: Option<Vec<String>>,

    /// TTL of every answer
    #[arg(long, env = "IPDNS_TTL")]
    ttl: Option<u32>,

    /// Nameserver list (default: the domain itself)
    #[arg(long, value_delimiter = ',', env = "IPDNS_NS")]
    ns: Option<Vec<String>>,

    /// SOA mbox (default admin@<domain>)
    #[arg(long, env = "IPDNS_MBOX")]
    mbox: Option<String>,

    /// SOA serial (default: start time as Unix seconds)
    #[arg(long, env = "IPDNS_SERIAL")]
    serial: Option<u32>,

    /// SOA refresh
    #[arg(long, env = "IPDNS_REFRESH")]
    refresh: Option<u32>,

    /// SOA retry
    #[arg(long, env = "IPDNS_RETRY")]
    retry: Option<u32>,

    /// SOA expire
    #[arg(long, env = "IPDNS_EXPIRE")]
    expire: Option<u32>,

    /// SOA minttl
    #[arg(long, env = "IPDNS_MINTTL")]
    minttl: Option<u32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "IPDNS_LOG_LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            bind_address: self.addr.clone(),
            port: self.port,
            protocols: self.proto.clone(),
            domains: self.domain.as_deref().map(non_empty),
            ttl: self.ttl,
            nameservers: self.ns.as_deref().map(non_empty),
            mbox: self.mbox.clone(),
            serial: self.serial,
            refresh: self.refresh,
            retry: self.retry,
            expire: self.expire,
            minttl: self.minttl,
            log_level: self.log_level.clone(),
        }
    }
}

fn non_empty(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!("Starting ipdns v{}", env!("CARGO_PKG_VERSION"));

    tokio::select! {
        result = server::start_dns_server(&config) => {
            if let Err(e) = &result {
                error!(error = %e, "DNS server error");
            }
            result
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
            Ok(())
        }
    }
}
