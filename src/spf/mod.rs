//! SPF resolution and flattening.
//!
//! This is the core of the tool: parse SPF TXT records, recursively expand
//! their `include:` mechanisms into a flat list of IP entries, and
//! deduplicate the result while preserving first-seen order.
//!
//! Only the `ip4:`, `ip6:`, and `include:` mechanisms are interpreted.
//! Everything else in a record (`a`, `mx`, `ptr`, `redirect=`, qualifiers,
//! ...) is ignored, and no RFC 7208 lookup-count ceiling is enforced; the
//! visited set is the sole recursion guard.

mod fetch;
mod flatten;
mod ip;
mod parser;
mod record;
mod resolve;
mod tag;

pub use fetch::fetch_spf;
pub use flatten::{dedup_entries, flatten};
pub use ip::{is_valid_address, AddressFamily};
pub use parser::parse_record;
pub use record::SpfRecord;
pub use resolve::resolve_domain;
pub use tag::family_tag;
