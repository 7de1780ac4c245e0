//! Domain records and request payloads.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Address {
    pub id: i64,
    pub customer_id: i64,
    pub address_details: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
}

/// Customer plus every address on file, for the detail endpoint.
#[derive(Debug, Serialize)]
pub struct CustomerWithAddresses {
    #[serde(flatten)]
    pub customer: Customer,
    pub addresses: Vec<Address>,
}

/// Incoming customer body. Fields stay optional so that missing and null
/// values reach validation instead of being rejected at deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct CustomerPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

impl CustomerPayload {
    /// Extracts the validated fields. Call only after validation passed.
    pub fn fields(&self) -> CustomerFields {
        CustomerFields {
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            phone_number: self.phone_number.clone().unwrap_or_default(),
        }
    }
}

/// Customer fields as they are written to and echoed from storage.
#[derive(Debug, Clone)]
pub struct CustomerFields {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl CustomerFields {
    pub fn into_customer(self, id: i64) -> Customer {
        Customer {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AddressPayload {
    pub address_details: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
}

impl AddressPayload {
    pub fn fields(&self) -> AddressFields {
        AddressFields {
            address_details: self.address_details.clone().unwrap_or_default(),
            city: self.city.clone().unwrap_or_default(),
            state: self.state.clone().unwrap_or_default(),
            pin_code: self.pin_code.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AddressFields {
    pub address_details: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
}

impl AddressFields {
    pub fn into_address(self, id: i64, customer_id: i64) -> Address {
        Address {
            id,
            customer_id,
            address_details: self.address_details,
            city: self.city,
            state: self.state,
            pin_code: self.pin_code,
        }
    }
}

/// Page metadata attached to list responses.
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_records: i64,
    pub records_per_page: u32,
    pub has_next: bool,
    pub has_previous: bool,
}
