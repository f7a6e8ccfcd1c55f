//! Initialization of process-wide facilities (logger, DNS client).

mod logger;
mod resolver;

pub use logger::init_logger_with;
pub use resolver::init_dns_client;
