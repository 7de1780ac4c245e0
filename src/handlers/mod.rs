//! HTTP handlers for customer and address CRUD.

pub mod addresses;
pub mod customers;

use crate::error::{ApiError, Resource};

/// Path ids must be plain integers; anything else is a client error.
fn parse_id(raw: &str, resource: Resource) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId(resource))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("42", Resource::Customer).ok(), Some(42));
        assert!(parse_id("42abc", Resource::Customer).is_err());
        assert!(parse_id("", Resource::Address).is_err());
        assert!(parse_id("4.2", Resource::Address).is_err());
    }
}
