use sea_orm::{DatabaseBackend, Order, sea_query::SimpleExpr};

use crate::{field::Field, target::OrderTarget};

const DEFAULT_SORT_ORDER: &str = "ASC";

/// `desc` in any case sorts descending, anything else ascending
fn parse_order(direction: &str) -> Order {
    if direction.trim().eq_ignore_ascii_case("desc") {
        Order::Desc
    } else {
        Order::Asc
    }
}

/// Parse a `["column", "DESC"]` array. Malformed input yields `None`.
fn parse_json_sort(json: &str) -> Option<(String, String)> {
    let sort_vec: Vec<String> = serde_json::from_str(json).ok()?;
    let column = sort_vec.first()?.clone();
    let order = sort_vec
        .get(1)
        .cloned()
        .unwrap_or_else(|| DEFAULT_SORT_ORDER.to_string());
    Some((column, order))
}

/// Resolve the sort column and direction from either the React Admin form
/// (`sort=["name","DESC"]`) or the REST form (`sort=name&order=DESC`)
pub(crate) fn parse_sort(sort: &str, order: Option<&str>) -> Option<(String, String)> {
    let sort = sort.trim();
    if sort.is_empty() {
        return None;
    }
    if sort.starts_with('[') {
        parse_json_sort(sort)
    } else {
        Some((
            sort.to_string(),
            order.unwrap_or(DEFAULT_SORT_ORDER).to_string(),
        ))
    }
}

/// Order a query by a user-supplied column.
///
/// The column goes through the same checks as a search [`Field`], so JSON
/// selectors such as `address->city` work and anything unsafe is ignored.
///
/// ```rust
/// use query_filter::Orderable;
/// use sea_orm::sea_query::{Alias, Asterisk, Query, SqliteQueryBuilder};
///
/// let query = Query::select().column(Asterisk).from(Alias::new("users")).to_owned();
/// let query = Orderable::new("name", "desc").apply(query);
///
/// assert_eq!(
///     query.to_string(SqliteQueryBuilder),
///     r#"SELECT * FROM "users" ORDER BY "name" DESC"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Orderable {
    column: String,
    direction: Order,
    only: Option<Vec<String>>,
    backend: DatabaseBackend,
}

impl Orderable {
    pub fn new(column: impl Into<String>, direction: impl AsRef<str>) -> Self {
        Self {
            column: column.into().trim().to_string(),
            direction: parse_order(direction.as_ref()),
            only: None,
            backend: DatabaseBackend::Sqlite,
        }
    }

    /// Restrict ordering to these columns; anything else is ignored.
    /// Entries are trimmed the same way the sort column is.
    #[must_use]
    pub fn only<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only = Some(
            columns
                .into_iter()
                .map(|column| column.into().trim().to_string())
                .collect(),
        );
        self
    }

    #[must_use]
    pub fn backend(mut self, backend: DatabaseBackend) -> Self {
        self.backend = backend;
        self
    }

    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    #[must_use]
    pub fn direction(&self) -> Order {
        self.direction.clone()
    }

    fn is_allowed(&self) -> bool {
        self.only
            .as_ref()
            .is_none_or(|only| only.iter().any(|column| *column == self.column))
    }

    /// Expression and direction to order by, `None` if the column is unusable
    #[must_use]
    pub fn order(&self) -> Option<(SimpleExpr, Order)> {
        if !self.is_allowed() {
            tracing::debug!(column = %self.column, "sort column not in allow-list");
            return None;
        }

        match Field::new(self.column.as_str()).order_expr(self.backend) {
            Ok(expr) => Some((expr, self.direction.clone())),
            Err(error) => {
                tracing::debug!(column = %self.column, %error, "ignoring invalid sort column");
                None
            }
        }
    }

    pub fn apply<Q: OrderTarget>(&self, query: Q) -> Q {
        match self.order() {
            Some((expr, order)) => query.order_by_expr(expr, order),
            None => query,
        }
    }
}
