use socket2::{Domain, Protocol, Socket, Type};
use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::{TcpListener, UdpSocket};

const TCP_BACKLOG: i32 = 1024;

fn socket_domain(socket_addr: SocketAddr) -> Domain {
    if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    }
}

/// Run `bind` on `socket_addr`. The IPv6 wildcard is bound dual-stack; on
/// hosts without IPv6 it falls back to the IPv4 wildcard on the same port.
fn bind_with_fallback<T>(
    socket_addr: SocketAddr,
    bind: impl Fn(SocketAddr) -> io::Result<T>,
) -> io::Result<T> {
    match bind(socket_addr) {
        Err(e) if is_ipv6_wildcard(socket_addr) && ipv6_unavailable(&e) => {
            bind(SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), socket_addr.port()))
        }
        result => result,
    }
}

fn is_ipv6_wildcard(socket_addr: SocketAddr) -> bool {
    socket_addr.is_ipv6() && socket_addr.ip().is_unspecified()
}

fn ipv6_unavailable(error: &io::Error) -> bool {
    !matches!(
        error.kind(),
        io::ErrorKind::AddrInUse | io::ErrorKind::PermissionDenied
    )
}

/// Bind a non-blocking UDP socket. No address reuse: a second server on
/// the same port must fail to bind.
pub fn create_udp_socket(socket_addr: SocketAddr) -> io::Result<UdpSocket> {
    bind_with_fallback(socket_addr, bind_udp)
}

/// Bind a non-blocking TCP listener with `SO_REUSEADDR` so restarts are not
/// blocked by connections in TIME_WAIT.
pub fn create_tcp_listener(socket_addr: SocketAddr) -> io::Result<TcpListener> {
    bind_with_fallback(socket_addr, bind_tcp)
}

fn bind_udp(socket_addr: SocketAddr) -> io::Result<UdpSocket> {
    let socket = Socket::new(socket_domain(socket_addr), Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    let std_socket: std::net::UdpSocket = socket.into();
    UdpSocket::from_std(std_socket)
}

fn bind_tcp(socket_addr: SocketAddr) -> io::Result<TcpListener> {
    let socket = Socket::new(socket_domain(socket_addr), Type::STREAM, Some(Protocol::TCP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(TCP_BACKLOG)?;
    socket.set_nonblocking(true)?;
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
