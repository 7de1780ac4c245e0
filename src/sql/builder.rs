//! Builds the parameterized customer listing query from request parameters.

use serde::Deserialize;

use crate::model::Pagination;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

const CUSTOMER_COLUMNS: &str = "id, first_name, last_name, phone_number";

/// Raw listing parameters as they arrive on the query string. Everything is
/// optional text; parsing never rejects, it falls back to defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

/// Sortable customer columns. Only these names ever reach the SQL text;
/// anything that is not an exact column name falls back to the default.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Id,
    FirstName,
    LastName,
    PhoneNumber,
}

impl SortField {
    fn parse(raw: Option<&str>) -> SortField {
        match raw {
            Some("id") => SortField::Id,
            Some("first_name") => SortField::FirstName,
            Some("last_name") => SortField::LastName,
            Some("phone_number") => SortField::PhoneNumber,
            _ => SortField::FirstName,
        }
    }

    fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::FirstName => "first_name",
            SortField::LastName => "last_name",
            SortField::PhoneNumber => "phone_number",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn parse(raw: Option<&str>) -> SortOrder {
        match raw.map(str::to_ascii_uppercase).as_deref() {
            Some("ASC") => SortOrder::Asc,
            Some("DESC") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// A fully parsed listing query. Count and page SQL are derived from the
/// same conditions and binds so both always see an identical predicate.
#[derive(Debug)]
pub struct CustomerQuery {
    conditions: Vec<String>,
    binds: Vec<String>,
    sort_field: SortField,
    sort_order: SortOrder,
    page: u32,
    limit: u32,
}

fn trimmed(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn page_param(raw: &Option<String>) -> u32 {
    match trimmed(raw).and_then(|s| s.parse::<i64>().ok()) {
        Some(n) => n.clamp(1, i64::from(u32::MAX)) as u32,
        None => 1,
    }
}

fn limit_param(raw: &Option<String>) -> u32 {
    match trimmed(raw).and_then(|s| s.parse::<i64>().ok()) {
        Some(n) => n.clamp(1, i64::from(MAX_PAGE_SIZE)) as u32,
        None => DEFAULT_PAGE_SIZE,
    }
}

fn like_pattern(term: &str) -> String {
    format!("%{}%", term)
}

impl CustomerQuery {
    pub fn from_params(params: &ListParams) -> CustomerQuery {
        let mut conditions = Vec::new();
        let mut binds = Vec::new();

        if let Some(term) = trimmed(&params.search) {
            conditions.push(
                "(customers.first_name LIKE ? OR customers.last_name LIKE ? \
                 OR customers.phone_number LIKE ?)"
                    .to_string(),
            );
            let pattern = like_pattern(term);
            binds.push(pattern.clone());
            binds.push(pattern.clone());
            binds.push(pattern);
        }

        let mut address_conditions = Vec::new();
        if let Some(city) = trimmed(&params.city) {
            address_conditions.push("city LIKE ?");
            binds.push(like_pattern(city));
        }
        if let Some(state) = trimmed(&params.state) {
            address_conditions.push("state LIKE ?");
            binds.push(like_pattern(state));
        }
        if !address_conditions.is_empty() {
            conditions.push(format!(
                "customers.id IN (SELECT DISTINCT customer_id FROM addresses WHERE {})",
                address_conditions.join(" AND ")
            ));
        }

        CustomerQuery {
            conditions,
            binds,
            sort_field: SortField::parse(params.sort_by.as_deref()),
            sort_order: SortOrder::parse(params.sort_order.as_deref()),
            page: page_param(&params.page),
            limit: limit_param(&params.limit),
        }
    }

    fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.conditions.join(" AND "))
        }
    }

    /// Values for the filter placeholders, in placeholder order. The page
    /// query binds these first, then limit and offset.
    pub fn binds(&self) -> &[String] {
        &self.binds
    }

    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM customers{}", self.where_clause())
    }

    pub fn page_sql(&self) -> String {
        format!(
            "SELECT {} FROM customers{} ORDER BY {} {} LIMIT ? OFFSET ?",
            CUSTOMER_COLUMNS,
            self.where_clause(),
            self.sort_field.column(),
            self.sort_order.keyword(),
        )
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }

    /// Page metadata for a given filtered row count.
    pub fn pagination(&self, total: i64) -> Pagination {
        let limit = i64::from(self.limit);
        let total_pages = if total == 0 {
            0
        } else {
            ((total + limit - 1) / limit) as u32
        };
        Pagination {
            current_page: self.page,
            total_pages,
            total_records: total,
            records_per_page: self.limit,
            has_next: self.page < total_pages,
            has_previous: self.page > 1,
        }
    }
}
