pub mod config;
pub mod error;
pub mod global;
pub mod headlines;
pub mod http;
pub mod sources;
pub mod types;
pub mod upstream;
