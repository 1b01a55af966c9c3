pub mod codec;
pub mod handler;
pub mod udp;

pub use codec::{decode_query, encode_query, encode_response, CodecError};
pub use handler::DnsServerHandler;
pub use udp::{create_udp_socket, serve};
