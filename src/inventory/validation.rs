//! Item payload validation
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. name, quantity and price are all present
//! 2. name is non-empty
//! 3. name uses only ASCII letters, digits and spaces
//! 4. quantity is a JSON integer
//! 5. quantity is not negative
//! 6. quantity is not zero
//! 7. price is a JSON number
//! 8. price is not negative
//! 9. price is not zero
//!
//! Validation is pure and never coerces types: `"5"` is not a quantity
//! and `5.0` is not an integer.
//!
//! Numbers keep their source text (serde_json `arbitrary_precision`), so
//! integer-ness and sign are read from the literal itself. `-0` is zero and
//! integers wider than 64 bits are still integers.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Number, Value};

use super::errors::ValidationError;
use super::item::{ItemFields, ItemPayload};

fn name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^[A-Za-z0-9 ]*$").expect("name pattern is valid"))
}

/// Validates a payload, returning the fields to store on success.
pub fn validate(payload: &ItemPayload) -> Result<ItemFields, ValidationError> {
    let (name, quantity, price) = match (&payload.name, &payload.quantity, &payload.price) {
        (Some(name), Some(quantity), Some(price)) => (name, quantity, price),
        _ => return Err(ValidationError::MissingField),
    };

    let name = validate_name(name)?;
    let quantity = validate_quantity(quantity)?;
    let price = validate_price(price)?;

    Ok(ItemFields {
        name,
        quantity,
        price,
    })
}

fn validate_name(value: &Value) -> Result<String, ValidationError> {
    let name = match value {
        Value::String(s) => s,
        other if is_falsy(other) => return Err(ValidationError::EmptyName),
        _ => return Err(ValidationError::InvalidName),
    };

    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if !name_pattern().is_match(name) {
        return Err(ValidationError::InvalidName);
    }

    Ok(name.clone())
}

// Non-string values that count as "empty": null, false, zero, [] and {}.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn validate_quantity(value: &Value) -> Result<Number, ValidationError> {
    let number = match value {
        Value::Number(n) => n,
        _ => return Err(ValidationError::InvalidQuantityType),
    };

    let text = number.to_string();
    if text.contains(['.', 'e', 'E']) {
        return Err(ValidationError::InvalidQuantityType);
    }

    let (negative, digits) = match text.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, text.as_str()),
    };
    if digits.bytes().all(|b| b == b'0') {
        return Err(ValidationError::ZeroQuantity);
    }
    if negative {
        return Err(ValidationError::NegativeQuantity);
    }

    Ok(number.clone())
}

fn validate_price(value: &Value) -> Result<Number, ValidationError> {
    let number = match value {
        Value::Number(n) => n,
        _ => return Err(ValidationError::InvalidPriceType),
    };

    let amount = number
        .as_f64()
        .ok_or(ValidationError::InvalidPriceType)?;
    if amount < 0.0 {
        return Err(ValidationError::NegativePrice);
    }
    if amount == 0.0 {
        return Err(ValidationError::ZeroPrice);
    }

    Ok(number.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(body: Value) -> Result<ItemFields, ValidationError> {
        validate(&ItemPayload::from_value(&body))
    }

    #[test]
    fn test_valid_payload() {
        let fields = check(json!({"name": "Widget", "quantity": 5, "price": 9.99})).unwrap();
        assert_eq!(fields.name, "Widget");
        assert_eq!(fields.quantity, Number::from(5));
        assert_eq!(fields.price.as_f64(), Some(9.99));
    }

    #[test]
    fn test_integer_price_stays_integer() {
        let fields = check(json!({"name": "Widget", "quantity": 1, "price": 5})).unwrap();
        assert!(fields.price.is_u64());
    }

    #[test]
    fn test_name_with_spaces_and_digits() {
        assert!(check(json!({"name": "Apple Watch 2", "quantity": 1, "price": 1})).is_ok());
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            check(json!({"quantity": 1, "price": 100.0})),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            check(json!({"name": "Invalid Item", "price": 100.0})),
            Err(ValidationError::MissingField)
        );
        assert_eq!(
            check(json!({"name": "Invalid Item", "quantity": 1})),
            Err(ValidationError::MissingField)
        );
        assert_eq!(validate(&ItemPayload::default()), Err(ValidationError::MissingField));
    }

    #[test]
    fn test_name_rules() {
        assert_eq!(
            check(json!({"name": "", "quantity": 1, "price": 100.0})),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            check(json!({"name": null, "quantity": 1, "price": 100.0})),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            check(json!({"name": "Invalid@Item", "quantity": 1, "price": 100.0})),
            Err(ValidationError::InvalidName)
        );
        assert_eq!(
            check(json!({"name": 42, "quantity": 1, "price": 100.0})),
            Err(ValidationError::InvalidName)
        );
        assert_eq!(
            check(json!({"name": "Caf\u{e9}", "quantity": 1, "price": 100.0})),
            Err(ValidationError::InvalidName)
        );
    }

    #[test]
    fn test_quantity_rules() {
        for bad in [json!("one"), json!(""), json!(null), json!(1.5), json!(5.0), json!(true)] {
            assert_eq!(
                check(json!({"name": "Invalid Item", "quantity": bad, "price": 100.0})),
                Err(ValidationError::InvalidQuantityType),
                "quantity {bad} should be rejected as non-integer"
            );
        }
        assert_eq!(
            check(json!({"name": "Invalid Item", "quantity": -1, "price": 100.0})),
            Err(ValidationError::NegativeQuantity)
        );
        assert_eq!(
            check(json!({"name": "Invalid Item", "quantity": 0, "price": 100.0})),
            Err(ValidationError::ZeroQuantity)
        );
    }

    #[test]
    fn test_large_quantity() {
        let fields = check(json!({"name": "Bulk", "quantity": u64::MAX, "price": 1})).unwrap();
        assert_eq!(fields.quantity, Number::from(u64::MAX));
    }

    fn check_raw(body: &str) -> Result<ItemFields, ValidationError> {
        validate(&ItemPayload::from_body(body.as_bytes()))
    }

    #[test]
    fn test_quantity_beyond_64_bits() {
        let fields = check_raw(r#"{"name": "Bulk", "quantity": 100000000000000000000, "price": 1}"#)
            .unwrap();
        assert_eq!(fields.quantity.to_string(), "100000000000000000000");

        assert_eq!(
            check_raw(r#"{"name": "Bulk", "quantity": -100000000000000000000, "price": 1}"#),
            Err(ValidationError::NegativeQuantity)
        );
    }

    #[test]
    fn test_negative_zero_quantity_is_zero() {
        assert_eq!(
            check_raw(r#"{"name": "Widget", "quantity": -0, "price": 1}"#),
            Err(ValidationError::ZeroQuantity)
        );
    }

    #[test]
    fn test_exponent_quantity_is_not_integer() {
        for body in [
            r#"{"name": "Widget", "quantity": 1e3, "price": 1}"#,
            r#"{"name": "Widget", "quantity": 1E3, "price": 1}"#,
            r#"{"name": "Widget", "quantity": 2.0, "price": 1}"#,
            r#"{"name": "Widget", "quantity": -0.0, "price": 1}"#,
        ] {
            assert_eq!(check_raw(body), Err(ValidationError::InvalidQuantityType), "{body}");
        }
    }

    #[test]
    fn test_falsy_names_are_empty() {
        for name in [json!(0), json!(0.0), json!(false), json!([]), json!({})] {
            assert_eq!(
                check(json!({"name": name, "quantity": 1, "price": 100.0})),
                Err(ValidationError::EmptyName),
                "name {name}"
            );
        }
        for name in [json!(7), json!(true), json!(["a"]), json!({"a": 1})] {
            assert_eq!(
                check(json!({"name": name, "quantity": 1, "price": 100.0})),
                Err(ValidationError::InvalidName),
                "name {name}"
            );
        }
    }

    #[test]
    fn test_price_rules() {
        for bad in [json!("one hundred"), json!(""), json!(null), json!(false), json!([1])] {
            assert_eq!(
                check(json!({"name": "Invalid Item", "quantity": 1, "price": bad})),
                Err(ValidationError::InvalidPriceType),
                "price {bad} should be rejected as non-number"
            );
        }
        assert_eq!(
            check(json!({"name": "Invalid Item", "quantity": 1, "price": -100.0})),
            Err(ValidationError::NegativePrice)
        );
        assert_eq!(
            check(json!({"name": "Invalid Item", "quantity": 1, "price": -3})),
            Err(ValidationError::NegativePrice)
        );
        assert_eq!(
            check(json!({"name": "Invalid Item", "quantity": 1, "price": 0.0})),
            Err(ValidationError::ZeroPrice)
        );
        assert_eq!(
            check(json!({"name": "Invalid Item", "quantity": 1, "price": 0})),
            Err(ValidationError::ZeroPrice)
        );
    }

    #[test]
    fn test_first_failing_rule_wins() {
        assert_eq!(
            check(json!({"name": "Bad@Name", "quantity": -1, "price": -5})),
            Err(ValidationError::InvalidName)
        );
        assert_eq!(
            check(json!({"name": "Good Name", "quantity": 0, "price": -5})),
            Err(ValidationError::ZeroQuantity)
        );
        assert_eq!(
            check(json!({"name": "", "quantity": "x", "price": "y"})),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            check(json!({"name": "Good Name", "quantity": "x", "price": 0})),
            Err(ValidationError::InvalidQuantityType)
        );
    }

    #[test]
    fn test_validation_is_deterministic() {
        let body = json!({"name": "Bad@Name", "quantity": -1, "price": -5});
        for _ in 0..100 {
            assert_eq!(check(body.clone()), Err(ValidationError::InvalidName));
        }
    }
}
