//! Rolodex: customer and address records REST API over SQLite.

pub mod error;
pub mod model;
pub mod response;
pub mod sql;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, Resource};
pub use model::{Address, Customer, CustomerWithAddresses, Pagination};
pub use sql::{CustomerQuery, ListParams, SortField, SortOrder};
pub use state::AppState;
pub use store::{connect, init_schema};
pub use routes::{api_routes, app, common_routes_with_ready};
pub use service::{validate_address, validate_customer, AddressStore, CustomerStore};
