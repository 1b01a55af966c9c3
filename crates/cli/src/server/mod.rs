pub mod dns;
pub mod web;

pub use dns::{bind_dns_socket, start_dns_server};
pub use web::start_web_server;
