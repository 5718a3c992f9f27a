pub mod connection_probe;
pub mod search;
