use super::handler::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::Semaphore;
use tracing::{debug, info};

/// Largest datagram read from the socket; longer ones are truncated by the OS.
pub const MAX_DATAGRAM_SIZE: usize = 512;

/// Binds a non-blocking UDP socket on `socket_addr`. Must be called inside a
/// tokio runtime.
pub fn create_udp_socket(socket_addr: SocketAddr) -> io::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };
    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}

/// Receives datagrams forever, handing each one to its own task.
///
/// At most `max_inflight` handlers run at once. A datagram that arrives when the
/// limit is reached is dropped without a response. Receive errors are logged and
/// the loop carries on.
pub async fn serve(socket: Arc<UdpSocket>, handler: Arc<DnsServerHandler>, max_inflight: usize) {
    let permits = Arc::new(Semaphore::new(max_inflight.max(1)));
    let mut recv_buf = [0u8; MAX_DATAGRAM_SIZE];

    if let Ok(addr) = socket.local_addr() {
        info!(bind_address = %addr, max_inflight, "DNS server listening");
    }

    loop {
        let (n, from) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                debug!(error = %e, "UDP recv error");
                continue;
            }
        };

        let permit = match permits.clone().try_acquire_owned() {
            Ok(permit) => permit,
            Err(_) => {
                debug!(client = %from, "In-flight limit reached, dropping datagram");
                continue;
            }
        };

        let datagram = recv_buf[..n].to_vec();
        let handler = handler.clone();
        let socket = socket.clone();
        tokio::spawn(async move {
            let _permit = permit;
            if let Some(response) = handler.handle(&datagram, from).await {
                if let Err(e) = socket.send_to(&response, from).await {
                    debug!(client = %from, error = %e, "Failed to send response");
                }
            }
        });
    }
}
