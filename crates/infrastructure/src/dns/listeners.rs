use crate::dns::server::ZoneRequestHandler;
use crate::dns::socket::{create_tcp_listener, create_udp_socket};
use hickory_server::ServerFuture;
use ipdns_application::services::ZoneCatalog;
use ipdns_application::use_cases::ListenerPlan;
use ipdns_domain::Protocol;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

const TCP_IDLE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    #[error("failed to bind {binding}: {source}")]
    Bind {
        binding: String,
        #[source]
        source: io::Error,
    },

    #[error("listener {binding} failed: {message}")]
    Serve { binding: String, message: String },

    #[error("listener task failed: {0}")]
    Task(String),
}

/// Run every planned listener concurrently.
///
/// Returns the first listener error as soon as it happens; the remaining
/// listeners are aborted when the `JoinSet` is dropped. A listener that
/// stops without error is logged and the others keep serving. Returns
/// `Ok(())` only once all listeners have stopped cleanly.
pub async fn serve_listeners(plans: Vec<ListenerPlan>) -> Result<(), ListenerError> {
    let mut join_set = JoinSet::new();

    for plan in plans {
        for zone in &plan.zones {
            info!(listen = %plan.spec, domain = %zone.domain, "listen");
        }
        join_set.spawn(run_listener(plan));
    }

    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok(Ok(binding)) => warn!(listen = %binding, "listener stopped"),
            Ok(Err(e)) => {
                error!(error = %e, "listener failed");
                return Err(e);
            }
            Err(e) => return Err(ListenerError::Task(e.to_string())),
        }
    }

    Ok(())
}

async fn run_listener(plan: ListenerPlan) -> Result<String, ListenerError> {
    let binding = plan.spec.to_string();
    let bind_error = |source: io::Error| ListenerError::Bind {
        binding: binding.clone(),
        source,
    };

    let socket_addr = plan
        .spec
        .socket_addr()
        .map_err(|e| bind_error(io::Error::new(io::ErrorKind::InvalidInput, e.to_string())))?;

    let handler = ZoneRequestHandler::new(Arc::new(ZoneCatalog::new(plan.zones)));
    let mut server = ServerFuture::new(handler);

    match plan.spec.protocol {
        Protocol::Udp => server.register_socket(create_udp_socket(socket_addr).map_err(bind_error)?),
        Protocol::Tcp => server.register_listener(
            create_tcp_listener(socket_addr).map_err(bind_error)?,
            TCP_IDLE_TIMEOUT,
        ),
    }

    server
        .block_until_done()
        .await
        .map_err(|e| ListenerError::Serve {
            binding: binding.clone(),
            message: e.to_string(),
        })?;

    Ok(binding)
}
