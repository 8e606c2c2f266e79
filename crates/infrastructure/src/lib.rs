//! ipdns infrastructure: the hickory wire adapter and the listeners.
pub mod dns;
