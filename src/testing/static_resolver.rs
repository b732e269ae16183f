use std::collections::HashMap;
use std::io;
use std::net::IpAddr;

use crate::domain::AppError;
use crate::ports::NameResolver;

/// Resolver answering from a fixed table; unknown names fail to resolve.
#[derive(Default)]
pub struct StaticResolver {
    records: HashMap<String, Vec<IpAddr>>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, host: &str, addresses: &[&str]) -> Self {
        let parsed = addresses.iter().map(|a| a.parse().unwrap()).collect();
        self.records.insert(host.to_string(), parsed);
        self
    }
}

impl NameResolver for StaticResolver {
    fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, AppError> {
        if let Ok(ip) = host.parse::<IpAddr>() {
            return Ok(vec![ip]);
        }
        self.records.get(host).cloned().ok_or_else(|| {
            AppError::Io(io::Error::new(io::ErrorKind::NotFound, format!("unknown host {host}")))
        })
    }
}
