//! Product request body.
//!
//! The body is parsed into a `serde_json::Value` first so that the three
//! failure classes stay distinct: unparseable JSON, a missing key, and a key
//! whose value cannot be coerced. Coercion accepts what a lenient numeric
//! conversion would: numbers, numeric strings, and booleans.

use serde_json::{Map, Value};

use crate::error::{InventoryError, Result};

const REQUIRED_FIELDS: [&str; 3] = ["name", "price", "quantity"];

/// Validated `{name, price, quantity}` body for create and full replace.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPayload {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl ProductPayload {
    /// Parse and validate a raw request body. Unknown keys are ignored.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| InventoryError::MalformedJson(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(obj) = value else {
            return Err(InventoryError::MissingField("name"));
        };
        for key in REQUIRED_FIELDS {
            if !obj.contains_key(key) {
                return Err(InventoryError::MissingField(key));
            }
        }

        Ok(Self {
            name: name_field(&obj)?,
            price: price_field(&obj)?,
            quantity: quantity_field(&obj)?,
        })
    }
}

fn name_field(obj: &Map<String, Value>) -> Result<String> {
    match &obj["name"] {
        Value::String(s) => Ok(s.clone()),
        other => Err(InventoryError::invalid("name", format!("expected string, got {other}"))),
    }
}

fn price_field(obj: &Map<String, Value>) -> Result<f64> {
    let price = match &obj["price"] {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| InventoryError::invalid("price", format!("{n} is not representable")))?,
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| InventoryError::invalid("price", format!("{s:?}: {e}")))?,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        other => {
            return Err(InventoryError::invalid("price", format!("expected number, got {other}")))
        }
    };
    // "nan" / "inf" parse as f64 but cannot be serialized back as a JSON number.
    if !price.is_finite() {
        return Err(InventoryError::invalid("price", format!("{price} is not finite")));
    }
    Ok(price)
}

fn quantity_field(obj: &Map<String, Value>) -> Result<i64> {
    match &obj["quantity"] {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            // Floats truncate toward zero; u64 beyond i64 and non-finite values are rejected.
            match n.as_f64() {
                Some(f) if f.is_finite() && f.trunc().abs() < i64::MAX as f64 => {
                    Ok(f.trunc() as i64)
                }
                _ => Err(InventoryError::invalid("quantity", format!("{n} out of range"))),
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| InventoryError::invalid("quantity", format!("{s:?}: {e}"))),
        Value::Bool(b) => Ok(i64::from(*b)),
        other => Err(InventoryError::invalid("quantity", format!("expected integer, got {other}"))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ClientCode;

    fn parse(s: &str) -> Result<ProductPayload> {
        ProductPayload::from_slice(s.as_bytes())
    }

    #[test]
    fn accepts_plain_numbers() {
        let p = parse(r#"{"name":"Widget","price":9.99,"quantity":5}"#).unwrap();
        assert_eq!(p, ProductPayload { name: "Widget".into(), price: 9.99, quantity: 5 });
    }

    #[test]
    fn integer_price_becomes_float() {
        let p = parse(r#"{"name":"W","price":3,"quantity":1}"#).unwrap();
        assert_eq!(p.price, 3.0);
    }

    #[test]
    fn coerces_numeric_strings() {
        let p = parse(r#"{"name":"W","price":" 12.5 ","quantity":"7"}"#).unwrap();
        assert_eq!(p.price, 12.5);
        assert_eq!(p.quantity, 7);
    }

    #[test]
    fn float_quantity_truncates() {
        assert_eq!(parse(r#"{"name":"W","price":1,"quantity":5.9}"#).unwrap().quantity, 5);
        assert_eq!(parse(r#"{"name":"W","price":1,"quantity":-2.5}"#).unwrap().quantity, -2);
    }

    #[test]
    fn empty_body_is_malformed_json() {
        let err = parse("").unwrap_err();
        assert_eq!(err.client_code(), ClientCode::InvalidJson);
    }

    #[test]
    fn reports_first_missing_field() {
        let err = parse(r#"{"name":"X"}"#).unwrap_err();
        assert!(matches!(err, InventoryError::MissingField("price")));
    }

    #[test]
    fn non_object_is_invalid_product() {
        let err = parse("[1, 2, 3]").unwrap_err();
        assert_eq!(err.client_code(), ClientCode::InvalidProduct);
    }

    #[test]
    fn rejects_uncoercible_values() {
        for body in [
            r#"{"name":"W","price":"cheap","quantity":1}"#,
            r#"{"name":"W","price":null,"quantity":1}"#,
            r#"{"name":"W","price":"nan","quantity":1}"#,
            r#"{"name":"W","price":"-Infinity","quantity":1}"#,
            r#"{"name":"W","price":1,"quantity":"5.5"}"#,
            r#"{"name":"W","price":1,"quantity":[1]}"#,
            r#"{"name":7,"price":1,"quantity":1}"#,
        ] {
            let err = parse(body).unwrap_err();
            assert!(matches!(err, InventoryError::InvalidField { .. }), "{body}");
        }
    }
}
