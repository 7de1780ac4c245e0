//! Address persistence against SQLite.

use sqlx::SqlitePool;

use crate::model::{Address, AddressFields};

const ADDRESS_COLUMNS: &str = "id, customer_id, address_details, city, state, pin_code";

pub struct AddressStore;

impl AddressStore {
    /// Inserts one address under a customer. Returns the generated id.
    /// Callers confirm the customer exists first.
    pub async fn insert(
        pool: &SqlitePool,
        customer_id: i64,
        fields: &AddressFields,
    ) -> Result<i64, sqlx::Error> {
        let sql = "INSERT INTO addresses (customer_id, address_details, city, state, pin_code) \
                   VALUES (?, ?, ?, ?, ?)";
        tracing::debug!(sql = %sql, "query");
        let result = sqlx::query(sql)
            .bind(customer_id)
            .bind(&fields.address_details)
            .bind(&fields.city)
            .bind(&fields.state)
            .bind(&fields.pin_code)
            .execute(pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// All addresses for one customer, oldest first.
    pub async fn list_for_customer(
        pool: &SqlitePool,
        customer_id: i64,
    ) -> Result<Vec<Address>, sqlx::Error> {
        let sql = format!(
            "SELECT {} FROM addresses WHERE customer_id = ? ORDER BY id",
            ADDRESS_COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<sqlx::Sqlite, Address>(&sql)
            .bind(customer_id)
            .fetch_all(pool)
            .await
    }

    /// Rewrites the four address fields, then reads the row back so the
    /// caller can echo the stored record. None when no row matched.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        fields: &AddressFields,
    ) -> Result<Option<Address>, sqlx::Error> {
        let sql = "UPDATE addresses SET address_details = ?, city = ?, state = ?, pin_code = ? \
                   WHERE id = ?";
        tracing::debug!(sql = %sql, "query");
        let result = sqlx::query(sql)
            .bind(&fields.address_details)
            .bind(&fields.city)
            .bind(&fields.state)
            .bind(&fields.pin_code)
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let select = format!("SELECT {} FROM addresses WHERE id = ?", ADDRESS_COLUMNS);
        tracing::debug!(sql = %select, "query");
        sqlx::query_as::<sqlx::Sqlite, Address>(&select)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Deletes one address. Returns false when no row matched.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let sql = "DELETE FROM addresses WHERE id = ?";
        tracing::debug!(sql = %sql, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
