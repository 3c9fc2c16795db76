//! # Registry Dispatch Tests
//!
//! Drives the registry the way a host engine does: configuration loaded
//! from YAML, one shared registry, many calls from several threads.

use std::sync::Arc;

use sqlfn_core::{FunctionConfig, SqlValue};
use sqlfn_udf::{FunctionRegistry, UdfError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("sqlfn_udf=debug"))
        .with_test_writer()
        .try_init();
}

fn text(s: &str) -> SqlValue {
    SqlValue::from(s)
}

#[test]
fn yaml_configured_registry() {
    init_tracing();
    let config = FunctionConfig::from_yaml_str(
        "non_digit_contract: truncate_prefix\ntruncate_width: 4\n",
    )
    .unwrap();
    let registry = FunctionRegistry::new(config).unwrap();

    assert_eq!(
        registry.call("extract_strings", &[SqlValue::Integer(20240131)]).unwrap(),
        text("2024")
    );
    assert!(matches!(
        registry.call("extract_strings", &[SqlValue::Integer(999)]),
        Err(UdfError::Extract(_))
    ));
    // The other functions are unaffected by the contract.
    assert_eq!(
        registry.call("extract_digits", &[text("a1b2")]).unwrap(),
        text("12")
    );
}

#[test]
fn column_of_values() {
    init_tracing();
    let registry = FunctionRegistry::default();
    let column = vec![
        text("ACME-0042"),
        SqlValue::Null,
        SqlValue::Integer(-15),
        text(""),
    ];
    let digits: Vec<SqlValue> = column
        .iter()
        .map(|v| registry.call("GET_NUMERIC", std::slice::from_ref(v)).unwrap())
        .collect();
    assert_eq!(digits, vec![text("0042"), SqlValue::Null, text("15"), text("")]);

    let strings: Vec<SqlValue> = column
        .iter()
        .map(|v| registry.call("GET_STRINGS", std::slice::from_ref(v)).unwrap())
        .collect();
    assert_eq!(strings, vec![text("ACME-"), SqlValue::Null, text("-"), text("")]);
}

#[test]
fn shared_registry_across_threads() {
    init_tracing();
    let registry = Arc::new(FunctionRegistry::default());
    let expected = registry
        .call("DIGITS_SHA256", &[text("abc123def456xyz")])
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                registry
                    .call("DIGITS_SHA256", &[text("abc123def456xyz")])
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn empty_digits_fingerprint_through_registry() {
    let registry = FunctionRegistry::default();
    assert_eq!(
        registry.call("fingerprint_digits", &[text("")]).unwrap(),
        text(sqlfn_crypto::EMPTY_SHA256_HEX)
    );
}
