pub mod listeners;
pub mod record_mapper;
pub mod server;
pub mod socket;

pub use listeners::{serve_listeners, ListenerError};
pub use record_mapper::RecordMapper;
pub use server::ZoneRequestHandler;
