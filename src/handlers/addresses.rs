//! Address handlers: create and list under a customer, update, delete.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::error::{ApiError, Resource};
use crate::model::AddressPayload;
use crate::response::{created, ok, ok_message};
use crate::service::{validate_address, AddressStore, CustomerStore};
use crate::state::AppState;

use super::parse_id;

pub async fn create(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
    Json(payload): Json<AddressPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let customer_id = parse_id(&customer_id, Resource::Customer)?;
    validate_address(&payload)?;
    let exists = CustomerStore::exists(&state.pool, customer_id)
        .await
        .map_err(ApiError::db("Failed to create address"))?;
    if !exists {
        return Err(ApiError::NotFound(Resource::Customer));
    }
    let fields = payload.fields();
    let id = AddressStore::insert(&state.pool, customer_id, &fields)
        .await
        .map_err(ApiError::db("Failed to create address"))?;
    Ok(created(
        "Address created successfully",
        fields.into_address(id, customer_id),
    ))
}

pub async fn list(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let customer_id = parse_id(&customer_id, Resource::Customer)?;
    let exists = CustomerStore::exists(&state.pool, customer_id)
        .await
        .map_err(ApiError::db("Failed to retrieve addresses"))?;
    if !exists {
        return Err(ApiError::NotFound(Resource::Customer));
    }
    let addresses = AddressStore::list_for_customer(&state.pool, customer_id)
        .await
        .map_err(ApiError::db("Failed to retrieve addresses"))?;
    Ok(ok("Addresses retrieved successfully", addresses))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<AddressPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id, Resource::Address)?;
    validate_address(&payload)?;
    let address = AddressStore::update(&state.pool, id, &payload.fields())
        .await
        .map_err(ApiError::db("Failed to update address"))?
        .ok_or(ApiError::NotFound(Resource::Address))?;
    Ok(ok("Address updated successfully", address))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id, Resource::Address)?;
    let deleted = AddressStore::delete(&state.pool, id)
        .await
        .map_err(ApiError::db("Failed to delete address"))?;
    if !deleted {
        return Err(ApiError::NotFound(Resource::Address));
    }
    Ok(ok_message("Address deleted successfully"))
}
