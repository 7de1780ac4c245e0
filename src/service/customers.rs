//! Customer persistence against SQLite.

use sqlx::SqlitePool;

use crate::model::{Customer, CustomerFields};
use crate::sql::CustomerQuery;

pub struct CustomerStore;

impl CustomerStore {
    /// Inserts one customer. Returns the generated id.
    pub async fn insert(pool: &SqlitePool, fields: &CustomerFields) -> Result<i64, sqlx::Error> {
        let sql = "INSERT INTO customers (first_name, last_name, phone_number) VALUES (?, ?, ?)";
        tracing::debug!(sql = %sql, "query");
        let result = sqlx::query(sql)
            .bind(&fields.first_name)
            .bind(&fields.last_name)
            .bind(&fields.phone_number)
            .execute(pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Runs the listing query twice over one predicate: once to count the
    /// filtered set, once to fetch the requested page.
    pub async fn fetch_page(
        pool: &SqlitePool,
        query: &CustomerQuery,
    ) -> Result<(Vec<Customer>, i64), sqlx::Error> {
        let count_sql = query.count_sql();
        tracing::debug!(sql = %count_sql, "query");
        let mut count = sqlx::query_scalar::<sqlx::Sqlite, i64>(&count_sql);
        for bind in query.binds() {
            count = count.bind(bind.as_str());
        }
        let total = count.fetch_one(pool).await?;

        let page_sql = query.page_sql();
        tracing::debug!(sql = %page_sql, "query");
        let mut page = sqlx::query_as::<sqlx::Sqlite, Customer>(&page_sql);
        for bind in query.binds() {
            page = page.bind(bind.as_str());
        }
        let customers = page
            .bind(query.limit())
            .bind(query.offset())
            .fetch_all(pool)
            .await?;

        Ok((customers, total))
    }

    /// Fetches one customer by id.
    pub async fn fetch(pool: &SqlitePool, id: i64) -> Result<Option<Customer>, sqlx::Error> {
        let sql = "SELECT id, first_name, last_name, phone_number FROM customers WHERE id = ?";
        tracing::debug!(sql = %sql, "query");
        sqlx::query_as::<sqlx::Sqlite, Customer>(sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// True when the customer row exists. Used for parent checks on
    /// address operations.
    pub async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let sql = "SELECT 1 FROM customers WHERE id = ?";
        tracing::debug!(sql = %sql, "query");
        let hit: Option<i32> = sqlx::query_scalar(sql).bind(id).fetch_optional(pool).await?;
        Ok(hit.is_some())
    }

    /// Replaces the three mutable fields. Returns false when no row matched.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        fields: &CustomerFields,
    ) -> Result<bool, sqlx::Error> {
        let sql = "UPDATE customers SET first_name = ?, last_name = ?, phone_number = ? WHERE id = ?";
        tracing::debug!(sql = %sql, "query");
        let result = sqlx::query(sql)
            .bind(&fields.first_name)
            .bind(&fields.last_name)
            .bind(&fields.phone_number)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deletes the customer; the addresses cascade goes with it.
    /// Returns false when no row matched.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
        let sql = "DELETE FROM customers WHERE id = ?";
        tracing::debug!(sql = %sql, "query");
        let result = sqlx::query(sql).bind(id).execute(pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
