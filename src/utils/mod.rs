//! Request-handling helpers.

pub mod client_ip;
