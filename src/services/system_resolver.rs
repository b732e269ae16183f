use std::net::{IpAddr, ToSocketAddrs};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::NameResolver;

/// Resolves names through the host's configured resolver (`getaddrinfo`).
#[derive(Debug, Clone, Default)]
pub struct SystemNameResolver;

impl SystemNameResolver {
    pub fn new() -> Self {
        Self
    }
}

impl NameResolver for SystemNameResolver {
    fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, AppError> {
        let host = host.trim().trim_start_matches('[').trim_end_matches(']');
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(vec![ip]);
        }

        let mut addresses: Vec<IpAddr> =
            (host, 0u16).to_socket_addrs()?.map(|socket| socket.ip()).collect();
        addresses.sort();
        addresses.dedup();
        debug!(host, ?addresses, "resolved");
        Ok(addresses)
    }
}
