//! ipdns application layer: wildcard resolution, reply assembly and
//! listener planning.
pub mod services;
pub mod use_cases;
