use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

/// Gets the address to serve robots.txt on from the env vars HOST and PORT.
/// Uses defaults `127.0.0.1:3000` for whichever is unset.
pub fn get_bind_address() -> Result<SocketAddr, BindAddressError> {
    bind_address(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
}

/// Parses a bind address from optional host and port strings.
pub fn bind_address(host: Option<&str>, port: Option<&str>) -> Result<SocketAddr, BindAddressError> {
    let host = host.map(str::trim).filter(|h| !h.is_empty()).unwrap_or(DEFAULT_HOST);
    let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
        Some(p) => p.parse::<u16>()?,
        None => DEFAULT_PORT,
    };
    Ok(format!("{}:{}", host, port).parse::<SocketAddr>()?)
}

#[derive(Debug, Error)]
pub enum BindAddressError {
    #[error("Invalid port: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Invalid hostname: {0}")]
    InvalidHostname(#[from] AddrParseError),
}
