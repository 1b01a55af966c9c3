use std::net::SocketAddr;
use std::sync::Arc;
use tierdns_application::use_cases::ResolveRecordUseCase;
use tierdns_infrastructure::dns::{create_udp_socket, serve, DnsServerHandler};
use tokio::net::UdpSocket;
use tracing::{error, info};

/// Binding happens before anything is spawned so a taken port stops startup.
pub fn bind_dns_socket(addr: SocketAddr) -> anyhow::Result<Arc<UdpSocket>> {
    let socket = create_udp_socket(addr).map_err(|e| {
        error!(bind_address = %addr, error = %e, "Failed to bind DNS socket");
        anyhow::anyhow!("failed to bind DNS socket on {}: {}", addr, e)
    })?;
    info!(bind_address = %addr, "DNS socket bound");
    Ok(Arc::new(socket))
}

pub async fn start_dns_server(
    socket: Arc<UdpSocket>,
    resolver: Arc<ResolveRecordUseCase>,
    max_inflight: usize,
) {
    let handler = Arc::new(DnsServerHandler::new(resolver));
    serve(socket, handler, max_inflight).await;
}
