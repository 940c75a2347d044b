pub mod client;

pub use client::{ClientConfig, LogFormat, Transport};
