//! Request payload validation from per-field rule tables.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ApiError;
use crate::model::{AddressPayload, CustomerPayload};

// ASCII digit classes: `\d` would also accept Unicode decimal digits.
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9\s\-()]{10,15}$").expect("Invalid regex"));

static PIN_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("Invalid regex"));

/// One field check: presence first, then an optional format pattern that
/// only runs when the field is present. Values are trimmed before checks.
struct FieldRule<P> {
    get: fn(&P) -> Option<&str>,
    required: &'static str,
    format: Option<(&'static LazyLock<Regex>, &'static str)>,
}

static CUSTOMER_RULES: [FieldRule<CustomerPayload>; 3] = [
    FieldRule {
        get: |p: &CustomerPayload| p.first_name.as_deref(),
        required: "First name is required",
        format: None,
    },
    FieldRule {
        get: |p: &CustomerPayload| p.last_name.as_deref(),
        required: "Last name is required",
        format: None,
    },
    FieldRule {
        get: |p: &CustomerPayload| p.phone_number.as_deref(),
        required: "Phone number is required",
        format: Some((&PHONE_PATTERN, "Phone number format is invalid")),
    },
];

static ADDRESS_RULES: [FieldRule<AddressPayload>; 4] = [
    FieldRule {
        get: |p: &AddressPayload| p.address_details.as_deref(),
        required: "Address details are required",
        format: None,
    },
    FieldRule {
        get: |p: &AddressPayload| p.city.as_deref(),
        required: "City is required",
        format: None,
    },
    FieldRule {
        get: |p: &AddressPayload| p.state.as_deref(),
        required: "State is required",
        format: None,
    },
    FieldRule {
        get: |p: &AddressPayload| p.pin_code.as_deref(),
        required: "PIN code is required",
        format: Some((&PIN_CODE_PATTERN, "PIN code must be 6 digits")),
    },
];

/// Runs every rule and collects violations in rule order.
fn apply<P>(payload: &P, rules: &[FieldRule<P>]) -> Vec<String> {
    let mut errors = Vec::new();
    for rule in rules {
        let value = (rule.get)(payload).map(str::trim).filter(|v| !v.is_empty());
        match value {
            None => errors.push(rule.required.to_string()),
            Some(value) => {
                if let Some((pattern, message)) = rule.format {
                    if !pattern.is_match(value) {
                        errors.push(message.to_string());
                    }
                }
            }
        }
    }
    errors
}

pub fn validate_customer(payload: &CustomerPayload) -> Result<(), ApiError> {
    let errors = apply(payload, &CUSTOMER_RULES);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

pub fn validate_address(payload: &AddressPayload) -> Result<(), ApiError> {
    let errors = apply(payload, &ADDRESS_RULES);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApiError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(first: &str, last: &str, phone: &str) -> CustomerPayload {
        CustomerPayload {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            phone_number: Some(phone.to_string()),
        }
    }

    fn violations(result: Result<(), ApiError>) -> Vec<String> {
        match result {
            Err(ApiError::Validation(errors)) => errors,
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn empty_customer_reports_every_field_in_order() {
        assert_eq!(
            violations(validate_customer(&CustomerPayload::default())),
            vec![
                "First name is required",
                "Last name is required",
                "Phone number is required",
            ]
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        assert_eq!(
            violations(validate_customer(&customer("  ", "Doe", "1234567890"))),
            vec!["First name is required"]
        );
    }

    #[test]
    fn phone_format_checked_only_when_present() {
        assert_eq!(
            violations(validate_customer(&customer("Jane", "Doe", "12345"))),
            vec!["Phone number format is invalid"]
        );

        let missing = CustomerPayload {
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            phone_number: None,
        };
        assert_eq!(
            violations(validate_customer(&missing)),
            vec!["Phone number is required"]
        );
    }

    #[test]
    fn phone_accepts_plus_spaces_dashes_and_parens() {
        for phone in ["+91 98765 43210", "(123) 456-7890", "1234567890"] {
            assert!(validate_customer(&customer("Jane", "Doe", phone)).is_ok(), "{phone}");
        }
    }

    #[test]
    fn phone_length_bounds_apply_after_trim() {
        assert!(validate_customer(&customer("Jane", "Doe", " 1234567890 ")).is_ok());
        assert!(validate_customer(&customer("Jane", "Doe", "123456789")).is_err());
        assert!(validate_customer(&customer("Jane", "Doe", "1234567890123456")).is_err());
    }

    #[test]
    fn phone_rejects_non_ascii_digits() {
        assert_eq!(
            violations(validate_customer(&customer("Jane", "Doe", "١٢٣٤٥٦٧٨٩٠"))),
            vec!["Phone number format is invalid"]
        );
    }

    fn address(details: &str, city: &str, state: &str, pin: &str) -> AddressPayload {
        AddressPayload {
            address_details: Some(details.to_string()),
            city: Some(city.to_string()),
            state: Some(state.to_string()),
            pin_code: Some(pin.to_string()),
        }
    }

    #[test]
    fn empty_address_reports_every_field_in_order() {
        assert_eq!(
            violations(validate_address(&AddressPayload::default())),
            vec![
                "Address details are required",
                "City is required",
                "State is required",
                "PIN code is required",
            ]
        );
    }

    #[test]
    fn pin_code_must_be_exactly_six_ascii_digits() {
        for bad in ["12345", "1234567", "12a456", "١٢٣٤٥٦"] {
            assert_eq!(
                violations(validate_address(&address("12 Main St", "Pune", "MH", bad))),
                vec!["PIN code must be 6 digits"],
                "{bad}"
            );
        }
        assert!(validate_address(&address("12 Main St", "Pune", "MH", "411001")).is_ok());
    }
}
