//! Tests for CLI argument parsing.

use clap::Parser;
use spf_flatten::Config;

#[test]
fn test_repeatable_seed_flags_accumulate_in_order() {
    let config = Config::try_parse_from([
        "spf_flatten",
        "--ip4",
        "198.51.100.1",
        "--ip4",
        "203.0.113.0/24",
        "--ip6",
        "2001:db8::1",
        "--include",
        "example.com",
        "--include",
        "example.net",
    ])
    .expect("Should parse repeated seed flags");

    assert_eq!(config.ip4, vec!["198.51.100.1", "203.0.113.0/24"]);
    assert_eq!(config.ip6, vec!["2001:db8::1"]);
    assert_eq!(config.include, vec!["example.com", "example.net"]);
}

#[test]
fn test_no_seed_flags_parses_but_is_empty() {
    // Enforcement of "at least one seed" lives in the binary, not the parser
    let config =
        Config::try_parse_from(["spf_flatten"]).expect("Empty invocation should still parse");
    assert!(config.is_empty());
    assert!(!config.tags);
}

#[test]
fn test_tags_flag() {
    let config = Config::try_parse_from(["spf_flatten", "--ip4", "198.51.100.1", "--tags"])
        .expect("Should parse --tags");
    assert!(config.tags);
}

#[test]
fn test_resolver_flag_overrides_default() {
    let config = Config::try_parse_from([
        "spf_flatten",
        "--include",
        "example.com",
        "--resolver",
        "192.0.2.1:5353",
    ])
    .expect("Should parse --resolver");
    assert_eq!(config.resolver, "192.0.2.1:5353");
}

#[test]
fn test_log_options_parse() {
    let config = Config::try_parse_from([
        "spf_flatten",
        "--include",
        "example.com",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse log options");

    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    );
    assert!(matches!(config.log_format, spf_flatten::LogFormat::Json));
}

#[test]
fn test_seed_flags_require_values() {
    assert!(Config::try_parse_from(["spf_flatten", "--ip4"]).is_err());
    assert!(Config::try_parse_from(["spf_flatten", "--include"]).is_err());
}
