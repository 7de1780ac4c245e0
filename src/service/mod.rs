//! Validation rules and the persistence gateway.

mod addresses;
mod customers;
mod validation;

pub use addresses::AddressStore;
pub use customers::CustomerStore;
pub use validation::{validate_address, validate_customer};
