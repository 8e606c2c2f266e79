#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use ipdns_application::use_cases::ListenerPlan;
use ipdns_domain::{ListenSpec, Protocol, ZoneConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpStream, UdpSocket};
use tokio::time::{sleep, timeout};

const ATTEMPTS: usize = 50;
const ATTEMPT_TIMEOUT: Duration = Duration::from_millis(200);

pub fn zone(domain: &str) -> Arc<ZoneConfig> {
    Arc::new(ZoneConfig {
        domain: domain.to_string(),
        ttl: 60,
        nameservers: vec![],
        mbox: format!("admin.{}", domain),
        serial: 2024010101,
        refresh: 3600,
        retry: 900,
        expire: 604_800,
        minttl: 3600,
    })
}

/// A localhost port currently free for both TCP and UDP.
pub fn free_port() -> u16 {
    loop {
        let tcp = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = tcp.local_addr().unwrap().port();
        if std::net::UdpSocket::bind(("127.0.0.1", port)).is_ok() {
            return port;
        }
    }
}

pub fn plan(protocol: Protocol, port: u16, zones: Vec<Arc<ZoneConfig>>) -> ListenerPlan {
    ListenerPlan {
        spec: ListenSpec::new("127.0.0.1", port, protocol),
        zones,
    }
}

pub fn build_query(id: u16, name: &str, record_type: RecordType, class: DNSClass) -> Message {
    let mut query = Query::query(Name::from_ascii(name).unwrap(), record_type);
    query.set_query_class(class);

    let mut message = Message::new();
    message
        .set_id(id)
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true);
    message.add_query(query);
    message
}

/// Send `request` over UDP, retrying until the listener answers.
pub async fn udp_exchange(server: SocketAddr, request: &Message) -> Message {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let bytes = request.to_vec().unwrap();
    let mut buf = vec![0u8; 4096];

    for _ in 0..ATTEMPTS {
        socket.send_to(&bytes, server).await.unwrap();
        if let Ok(Ok((len, _))) = timeout(ATTEMPT_TIMEOUT, socket.recv_from(&mut buf)).await {
            return Message::from_vec(&buf[..len]).unwrap();
        }
    }
    panic!("no UDP response from {}", server);
}

/// Send `request` over TCP with the two-byte length prefix.
pub async fn tcp_exchange(server: SocketAddr, request: &Message) -> Message {
    let bytes = request.to_vec().unwrap();

    let mut stream = None;
    for _ in 0..ATTEMPTS {
        match TcpStream::connect(server).await {
            Ok(s) => {
                stream = Some(s);
                break;
            }
            Err(_) => sleep(ATTEMPT_TIMEOUT).await,
        }
    }
    let mut stream = stream.unwrap_or_else(|| panic!("no TCP listener on {}", server));

    stream
        .write_all(&(bytes.len() as u16).to_be_bytes())
        .await
        .unwrap();
    stream.write_all(&bytes).await.unwrap();

    let len = stream.read_u16().await.unwrap() as usize;
    let mut buf = vec![0u8; len];
    stream.read_exact(&mut buf).await.unwrap();
    Message::from_vec(&buf).unwrap()
}
