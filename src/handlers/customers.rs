//! Customer handlers: create, list, get, get with addresses, update, delete.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::error::{ApiError, Resource};
use crate::model::{CustomerPayload, CustomerWithAddresses};
use crate::response::{created, ok, ok_message, ok_page};
use crate::service::{validate_customer, AddressStore, CustomerStore};
use crate::sql::{CustomerQuery, ListParams};
use crate::state::AppState;

use super::parse_id;

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CustomerPayload>,
) -> Result<impl IntoResponse, ApiError> {
    validate_customer(&payload)?;
    let fields = payload.fields();
    let id = CustomerStore::insert(&state.pool, &fields)
        .await
        .map_err(ApiError::db_or_phone_conflict("Failed to create customer"))?;
    Ok(created(
        "Customer created successfully",
        fields.into_customer(id),
    ))
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = CustomerQuery::from_params(&params);
    let (customers, total) = CustomerStore::fetch_page(&state.pool, &query)
        .await
        .map_err(ApiError::db("Failed to retrieve customers"))?;
    Ok(ok_page(
        "Customers retrieved successfully",
        customers,
        query.pagination(total),
    ))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id, Resource::Customer)?;
    let customer = CustomerStore::fetch(&state.pool, id)
        .await
        .map_err(ApiError::db("Failed to retrieve customer"))?
        .ok_or(ApiError::NotFound(Resource::Customer))?;
    Ok(ok("Customer retrieved successfully", customer))
}

pub async fn get_full(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id, Resource::Customer)?;
    let customer = CustomerStore::fetch(&state.pool, id)
        .await
        .map_err(ApiError::db("Failed to retrieve customer details"))?
        .ok_or(ApiError::NotFound(Resource::Customer))?;
    let addresses = AddressStore::list_for_customer(&state.pool, id)
        .await
        .map_err(ApiError::db("Failed to retrieve customer details"))?;
    Ok(ok(
        "Customer with addresses retrieved successfully",
        CustomerWithAddresses {
            customer,
            addresses,
        },
    ))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CustomerPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id, Resource::Customer)?;
    validate_customer(&payload)?;
    let fields = payload.fields();
    let updated = CustomerStore::update(&state.pool, id, &fields)
        .await
        .map_err(ApiError::db_or_phone_conflict("Failed to update customer"))?;
    if !updated {
        return Err(ApiError::NotFound(Resource::Customer));
    }
    Ok(ok(
        "Customer updated successfully",
        fields.into_customer(id),
    ))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id, Resource::Customer)?;
    let deleted = CustomerStore::delete(&state.pool, id)
        .await
        .map_err(ApiError::db("Failed to delete customer"))?;
    if !deleted {
        return Err(ApiError::NotFound(Resource::Customer));
    }
    Ok(ok_message("Customer deleted successfully"))
}
