#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use inventory_core::InventoryError;
use inventory_service::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
service:
  listen: "0.0.0.0:8080"
  lisen: "0.0.0.0:9090" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(matches!(err, InventoryError::BadConfig(_)));
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.service.listen, "0.0.0.0:8080");
    assert_eq!(cfg.service.listen_addr().unwrap().port(), 8080);
}

#[test]
fn rejects_unknown_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(matches!(err, InventoryError::BadConfig(_)));
}

#[test]
fn rejects_unparseable_listen() {
    let bad = r#"
version: 1
service:
  listen: "localhost"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("service.listen"));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let cfg = config::load_or_default("does/not/exist/inventory.yaml").expect("defaults");
    assert_eq!(cfg.service.listen, "0.0.0.0:8080");
    assert!(config::load_from_file("does/not/exist/inventory.yaml").is_err());
}
