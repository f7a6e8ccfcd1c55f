//! hickory-resolver backed TXT client.

use std::net::SocketAddr;
use std::time::Duration;

use hickory_resolver::config::{NameServerConfig, Protocol, ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;

use crate::config::constants::{DNS_ATTEMPTS, DNS_TIMEOUT_SECS};
use crate::dns::{DnsError, TxtClient};

/// TXT client that queries a single resolver endpoint over UDP.
///
/// The resolver is configured with recursion desired and EDNS(0) enabled so
/// large TXT answers (common for provider SPF records) fit in one response.
/// Exactly one attempt is made per query: a DNS failure anywhere in an
/// include tree aborts the whole flattening run, so retrying here would only
/// delay the inevitable error.
#[derive(Clone)]
pub struct HickoryClient {
    resolver: TokioAsyncResolver,
}

impl HickoryClient {
    /// Creates a client pointed at `endpoint`.
    pub fn new(endpoint: SocketAddr) -> Self {
        let mut config = ResolverConfig::new();
        config.add_name_server(NameServerConfig::new(endpoint, Protocol::Udp));

        let mut opts = ResolverOpts::default();
        opts.timeout = Duration::from_secs(DNS_TIMEOUT_SECS);
        opts.attempts = DNS_ATTEMPTS;
        opts.edns0 = true;
        opts.recursion_desired = true;
        // Queries always use the fully-qualified form; never append search domains
        opts.ndots = 0;

        Self {
            resolver: TokioAsyncResolver::tokio(config, opts),
        }
    }

    /// Maps a hickory lookup error onto the trait's result type.
    ///
    /// A successful response that simply has no TXT records is not a failure;
    /// it becomes an empty segment list. A non-success response code or a
    /// transport problem becomes the corresponding [`DnsError`].
    fn classify_error(e: &ResolveError) -> Result<Vec<String>, DnsError> {
        match e.kind() {
            ResolveErrorKind::NoRecordsFound { response_code, .. } => {
                if *response_code == ResponseCode::NoError {
                    Ok(Vec::new())
                } else {
                    Err(DnsError::ResponseCode(response_code.to_string()))
                }
            }
            ResolveErrorKind::Timeout => {
                Err(DnsError::Transport(format!("query timed out: {e}")))
            }
            _ => Err(DnsError::Transport(e.to_string())),
        }
    }
}

impl TxtClient for HickoryClient {
    async fn query_txt(&self, fqdn: &str) -> Result<Vec<String>, DnsError> {
        match self.resolver.txt_lookup(fqdn).await {
            Ok(lookup) => {
                // One element per TXT character-string segment; SPF candidate
                // selection scans segments individually, so do not join them.
                let segments: Vec<String> = lookup
                    .iter()
                    .flat_map(|txt| {
                        txt.iter()
                            .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                    })
                    .collect();
                log::debug!("TXT query for {fqdn} returned {} segment(s)", segments.len());
                Ok(segments)
            }
            Err(e) => {
                let classified = Self::classify_error(&e);
                if let Err(ref err) = classified {
                    log::debug!("TXT query for {fqdn} failed: {err}");
                }
                classified
            }
        }
    }
}
