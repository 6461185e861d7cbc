//! # Field specifiers
//!
//! A [`Field`] is one column a keyword is matched against. Callers hand the
//! search a mix of plain strings, JSON selectors, raw SQL and pre-built
//! sea-query expressions; each of those converts into a `Field` before any
//! validation or SQL generation looks at it.
//!
//! | Input                          | Source          | Rendered as                           |
//! |--------------------------------|-----------------|---------------------------------------|
//! | `"name"`, `"users.name"`       | column          | `"users"."name"`                      |
//! | `"address->postcode"`          | JSON path       | `LOWER(json_extract("address", ...))` |
//! | `Field::raw("users.name")`     | raw fragment    | `"users"."name"`                      |
//! | `Field::raw("first || last")`  | raw fragment    | `first \|\| last`                     |
//! | `Field::expr(Expr::cust(..))`  | expression      | verbatim                              |

use sea_orm::{
    DatabaseBackend,
    sea_query::{Alias, Expr, SimpleExpr},
};

use crate::{
    errors::FieldError,
    json::{json_search_expr, json_text_expr},
    validation::{column_segments, json_path_segments},
};

const JSON_SELECTOR: &str = "->";

#[derive(Debug, Clone, PartialEq)]
enum Source {
    Column(String),
    Json { column: String, path: String },
    Raw(String),
    Expr(SimpleExpr),
}

/// A single searchable column.
///
/// ```rust
/// use query_filter::Field;
///
/// let postcode = Field::new("address->postcode");
/// assert!(postcode.is_json_path());
///
/// let exact = Field::new("email").no_wildcard_searching();
/// assert_eq!(exact.wildcard(), Some(false));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    source: Source,
    wildcard: Option<bool>,
}

impl Field {
    /// Parse a column specifier. `a->b->c` selects key `b.c` inside JSON column `a`.
    pub fn new(column: impl Into<String>) -> Self {
        let column = column.into();
        let source = match column.split_once(JSON_SELECTOR) {
            Some((base, path)) => Source::Json {
                column: base.to_string(),
                path: path.to_string(),
            },
            None => Source::Column(column),
        };
        Self::from_source(source)
    }

    /// A SQL fragment the caller vouches for. It is never validated.
    ///
    /// A fragment that happens to be a qualified column name is quoted like one,
    /// anything else is emitted as written.
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::from_source(Source::Raw(sql.into()))
    }

    /// Search against an arbitrary sea-query expression
    #[must_use]
    pub fn expr(expr: SimpleExpr) -> Self {
        Self::from_source(Source::Expr(expr))
    }

    fn from_source(source: Source) -> Self {
        Self {
            source,
            wildcard: None,
        }
    }

    /// Match this field against the bare keyword only
    #[must_use]
    pub fn no_wildcard_searching(mut self) -> Self {
        self.wildcard = Some(false);
        self
    }

    /// Always expand this field into prefix/suffix/contains matches, even when
    /// the search as a whole has wildcards turned off
    #[must_use]
    pub fn wildcard_searching(mut self) -> Self {
        self.wildcard = Some(true);
        self
    }

    /// Explicit wildcard override, `None` when the field follows the search
    #[must_use]
    pub const fn wildcard(&self) -> Option<bool> {
        self.wildcard
    }

    #[must_use]
    pub const fn is_json_path(&self) -> bool {
        matches!(self.source, Source::Json { .. })
    }

    #[must_use]
    pub const fn is_raw(&self) -> bool {
        matches!(self.source, Source::Raw(_) | Source::Expr(_))
    }

    /// Check the specifier without building any SQL.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] describing the first unsafe or malformed part.
    pub fn validate(&self) -> Result<(), FieldError> {
        match &self.source {
            Source::Column(column) => column_segments(column).map(|_| ()),
            Source::Json { column, path } => {
                column_segments(column)?;
                json_path_segments(column, path).map(|_| ())
            }
            Source::Raw(_) | Source::Expr(_) => Ok(()),
        }
    }

    /// Expression a keyword is matched against. JSON values are lower-cased.
    pub(crate) fn search_expr(&self, backend: DatabaseBackend) -> Result<SimpleExpr, FieldError> {
        self.resolve(backend, json_search_expr)
    }

    /// Expression a result set is ordered by. JSON values keep their case.
    pub(crate) fn order_expr(&self, backend: DatabaseBackend) -> Result<SimpleExpr, FieldError> {
        self.resolve(backend, json_text_expr)
    }

    fn resolve(
        &self,
        backend: DatabaseBackend,
        extract: fn(SimpleExpr, &[&str], DatabaseBackend) -> SimpleExpr,
    ) -> Result<SimpleExpr, FieldError> {
        match &self.source {
            Source::Column(column) => column_ref(&column_segments(column)?),
            Source::Json { column, path } => {
                let base = column_ref(&column_segments(column)?)?;
                let keys = json_path_segments(column, path)?;
                Ok(extract(base, &keys, backend))
            }
            Source::Raw(sql) => Ok(match column_segments(sql) {
                Ok(segments) => column_ref(&segments)?,
                Err(_) => Expr::cust(sql.clone()),
            }),
            Source::Expr(expr) => Ok(expr.clone()),
        }
    }
}

fn column_ref(segments: &[&str]) -> Result<SimpleExpr, FieldError> {
    let expr = match segments {
        [column] => Expr::col(Alias::new(*column)),
        [table, column] => Expr::col((Alias::new(*table), Alias::new(*column))),
        [schema, table, column] => Expr::col((
            Alias::new(*schema),
            Alias::new(*table),
            Alias::new(*column),
        )),
        _ => return Err(FieldError::TooManySegments(segments.join("."))),
    };
    Ok(expr.into())
}

impl From<&str> for Field {
    fn from(column: &str) -> Self {
        Self::new(column)
    }
}

impl From<String> for Field {
    fn from(column: String) -> Self {
        Self::new(column)
    }
}

impl From<&String> for Field {
    fn from(column: &String) -> Self {
        Self::new(column.as_str())
    }
}

impl From<SimpleExpr> for Field {
    fn from(expr: SimpleExpr) -> Self {
        Self::expr(expr)
    }
}
