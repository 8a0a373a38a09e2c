//! Product payload vector tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]


use inventory_core::ProductPayload;

#[test]
fn valid_payloads() {
    for v in vector_loader::load("product_valid.json") {
        let expect = v.expect.as_ref().expect("valid vector needs `expect`");
        let p = ProductPayload::from_slice(v.body.as_bytes())
            .unwrap_or_else(|e| panic!("{}: unexpected error {e}", v.description));
        assert_eq!(p.name, expect.name, "{}", v.description);
        assert_eq!(p.price, expect.price, "{}", v.description);
        assert_eq!(p.quantity, expect.quantity, "{}", v.description);
    }
}

#[test]
fn invalid_payloads() {
    for v in vector_loader::load("product_invalid.json") {
        let expect = v.expect_error.as_ref().expect("invalid vector needs `expect_error`");
        let err = ProductPayload::from_slice(v.body.as_bytes())
            .expect_err(&v.description);
        assert_eq!(err.client_code().as_str(), expect.code, "{}", v.description);
        assert_eq!(err.client_code().http_status(), 400, "{}", v.description);
    }
}
