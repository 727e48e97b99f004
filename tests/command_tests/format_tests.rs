//! Value, expiry and TTL formatting Tests

use std::time::Duration;

use pda::commands::{
    format_bytes, format_expiry, format_remaining, parse_ttl, printable_bytes, BINARY_PLACEHOLDER,
};

// =============================================================================
// parse_ttl Tests
// =============================================================================

#[test]
fn test_parse_ttl_units() {
    assert_eq!(parse_ttl("90s").unwrap(), Duration::from_secs(90));
    assert_eq!(parse_ttl("15m").unwrap(), Duration::from_secs(900));
    assert_eq!(parse_ttl("2h").unwrap(), Duration::from_secs(7200));
    assert_eq!(parse_ttl("1d").unwrap(), Duration::from_secs(86_400));
}

#[test]
fn test_parse_ttl_compound() {
    assert_eq!(parse_ttl("1h30m").unwrap(), Duration::from_secs(5400));
    assert_eq!(parse_ttl(" 1d2h3m4s ").unwrap(), Duration::from_secs(93_784));
}

#[test]
fn test_parse_ttl_spaced_and_long_units() {
    assert_eq!(parse_ttl("2h 30m").unwrap(), Duration::from_secs(9000));
    assert_eq!(parse_ttl("1day").unwrap(), Duration::from_secs(86_400));
    assert_eq!(parse_ttl("45sec").unwrap(), Duration::from_secs(45));
}

#[test]
fn test_parse_ttl_rejects_bad_input() {
    for raw in ["", "10", "abc", "5x", "m", "0s", "500ms"] {
        let err = parse_ttl(raw).unwrap_err();
        assert!(err.to_string().starts_with("invalid duration"), "{:?}", raw);
    }
}

// =============================================================================
// Expiry Tests
// =============================================================================

#[test]
fn test_format_remaining() {
    assert_eq!(format_remaining(45), "45s");
    assert_eq!(format_remaining(125), "2m5s");
    assert_eq!(format_remaining(3723), "1h2m3s");
    assert_eq!(format_remaining(3600), "1h0m0s");
}

#[test]
fn test_format_expiry() {
    let at = 1_700_000_000;
    assert_eq!(format_expiry(0, at), "never");
    assert_eq!(format_expiry(at, at), "2023-11-14T22:13:20Z (expired)");
    assert_eq!(format_expiry(at, at - 90), "2023-11-14T22:13:20Z (in 1m30s)");
}

// =============================================================================
// Byte Formatting Tests
// =============================================================================

#[test]
fn test_format_bytes() {
    assert_eq!(format_bytes(false, true, b"text"), "text");
    assert_eq!(format_bytes(false, true, &[0xff]), BINARY_PLACEHOLDER);
    assert_eq!(format_bytes(true, true, &[0xff]), "\u{fffd}");
    assert_eq!(format_bytes(false, false, &[0xff]), "\u{fffd}");
}

#[test]
fn test_printable_bytes() {
    assert_eq!(printable_bytes(false, true, &[0xff]), BINARY_PLACEHOLDER.as_bytes());
    assert_eq!(printable_bytes(false, false, &[0xff]), &[0xff]);
    assert_eq!(printable_bytes(false, true, b"ok"), b"ok");
}
