use std::net::IpAddr;

use crate::domain::AppError;

/// Port for name resolution, used only for advisory checks.
pub trait NameResolver {
    /// Resolve `host` (a name or an IP literal) to its addresses.
    fn lookup(&self, host: &str) -> Result<Vec<IpAddr>, AppError>;
}
