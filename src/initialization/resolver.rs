//! DNS client initialization.

use std::net::{SocketAddr, ToSocketAddrs};

use crate::dns::HickoryClient;
use crate::error_handling::InitializationError;

/// Builds the DNS client from a `host:port` resolver endpoint.
///
/// Accepts a literal socket address (`127.0.0.1:53`, `[::1]:53`) or a
/// hostname with port, resolved through the system resolver. The endpoint
/// itself is the only thing the operating system resolves; every SPF query
/// afterwards goes straight to this endpoint.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if the endpoint is not a
/// valid `host:port` string or the hostname does not resolve.
pub fn init_dns_client(endpoint: &str) -> Result<HickoryClient, InitializationError> {
    let addr = parse_endpoint(endpoint)?;
    log::debug!("using DNS resolver endpoint {addr}");
    Ok(HickoryClient::new(addr))
}

fn parse_endpoint(endpoint: &str) -> Result<SocketAddr, InitializationError> {
    if let Ok(addr) = endpoint.parse::<SocketAddr>() {
        return Ok(addr);
    }
    endpoint
        .to_socket_addrs()
        .map_err(|e| {
            InitializationError::DnsResolverError(format!(
                "invalid resolver endpoint '{endpoint}' (expected host:port): {e}"
            ))
        })?
        .next()
        .ok_or_else(|| {
            InitializationError::DnsResolverError(format!(
                "resolver endpoint '{endpoint}' did not resolve to any address"
            ))
        })
}
