//! In-memory TXT client for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::dns::{DnsError, TxtClient};

/// Mock TXT client backed by canned records.
///
/// Domains are keyed case-insensitively and without the trailing dot. A
/// domain with neither records nor an injected error answers successfully
/// with an empty segment list, like a real zone without TXT records. The
/// query counter lets tests assert that no lookups happened at all.
#[derive(Default)]
pub struct MockTxtClient {
    txt: Mutex<HashMap<String, Vec<String>>>,
    errors: Mutex<HashMap<String, DnsError>>,
    queries: AtomicUsize,
}

impl MockTxtClient {
    /// Creates an empty mock client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers TXT segments for a domain.
    pub fn add_txt(&self, domain: &str, segments: Vec<String>) {
        self.txt
            .lock()
            .unwrap()
            .insert(Self::key(domain), segments);
    }

    /// Makes every query for `domain` fail with `error`.
    pub fn set_error(&self, domain: &str, error: DnsError) {
        self.errors.lock().unwrap().insert(Self::key(domain), error);
    }

    /// Number of queries issued so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn key(domain: &str) -> String {
        domain.trim_end_matches('.').to_lowercase()
    }
}

impl TxtClient for MockTxtClient {
    async fn query_txt(&self, fqdn: &str) -> Result<Vec<String>, DnsError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let key = Self::key(fqdn);
        if let Some(err) = self.errors.lock().unwrap().get(&key) {
            return Err(err.clone());
        }
        Ok(self
            .txt
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_default())
    }
}
