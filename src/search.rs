//! # Keyword search
//!
//! [`Searchable`] turns a keyword and a list of columns into one grouped
//! `LIKE` predicate and ANDs it onto a query:
//!
//! ```rust
//! use query_filter::{Field, Searchable};
//! use sea_orm::sea_query::{Alias, Asterisk, Query, SqliteQueryBuilder};
//!
//! let query = Query::select()
//!     .column(Asterisk)
//!     .from(Alias::new("users"))
//!     .to_owned();
//!
//! let query = Searchable::new("hello", [Field::new("name").no_wildcard_searching()]).apply(query);
//!
//! assert_eq!(
//!     query.to_string(SqliteQueryBuilder),
//!     r#"SELECT * FROM "users" WHERE "name" LIKE 'hello'"#
//! );
//! ```
//!
//! With wildcards on (the default) each column is matched four ways, bound in
//! this order: `hello`, `hello%`, `%hello`, `%hello%`.
//!
//! Columns that fail validation are dropped without an error, and a blank
//! keyword or an empty column list leaves the query untouched.

use sea_orm::{
    Condition, DatabaseBackend,
    sea_query::{Expr, LikeExpr, SimpleExpr},
};

use crate::{field::Field, target::SearchTarget};

/// Must not need escaping inside a string literal in any supported dialect
const LIKE_ESCAPE: char = '!';

/// Escape LIKE wildcards so a keyword containing `%` or `_` matches literally
fn escape_like_wildcards(input: &str) -> String {
    input
        .replace(LIKE_ESCAPE, "!!")
        .replace('%', "!%")
        .replace('_', "!_")
}

/// The LIKE patterns one field is bound to, in binding order
fn keyword_patterns(keyword: &str, wildcard: bool) -> Vec<String> {
    if wildcard {
        vec![
            keyword.to_string(),
            format!("{keyword}%"),
            format!("%{keyword}"),
            format!("%{keyword}%"),
        ]
    } else {
        vec![keyword.to_string()]
    }
}

/// One searchable column after validation, with the patterns it is matched against
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FieldClause {
    pub(crate) expr: SimpleExpr,
    pub(crate) patterns: Vec<String>,
}

/// Search a keyword across a set of columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Searchable {
    keyword: String,
    fields: Vec<Field>,
    wildcard: bool,
    escape_wildcards: bool,
    backend: DatabaseBackend,
}

impl Searchable {
    /// Columns may be any mix of `&str`, `String`, [`Field`] and `SimpleExpr`
    /// once converted, e.g. `[Field::new("name"), "email".into()]`.
    pub fn new<I, F>(keyword: impl AsRef<str>, columns: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        Self {
            keyword: keyword.as_ref().to_string(),
            fields: columns.into_iter().map(Into::into).collect(),
            wildcard: true,
            escape_wildcards: false,
            backend: DatabaseBackend::Sqlite,
        }
    }

    /// Match the bare keyword only, except on fields that opted back in with
    /// [`Field::wildcard_searching`]
    #[must_use]
    pub fn no_wildcard_searching(mut self) -> Self {
        self.wildcard = false;
        self
    }

    /// Treat `%`, `_` and `!` in the keyword literally (`LIKE ... ESCAPE '!'`)
    #[must_use]
    pub fn escape_like_wildcards(mut self) -> Self {
        self.escape_wildcards = true;
        self
    }

    /// Dialect used for JSON path columns. Defaults to SQLite.
    #[must_use]
    pub fn backend(mut self, backend: DatabaseBackend) -> Self {
        self.backend = backend;
        self
    }

    /// The keyword exactly as it will be bound
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Validated fields with their patterns. Invalid fields are logged and skipped.
    pub(crate) fn clauses(&self) -> Vec<FieldClause> {
        if self.keyword.trim().is_empty() {
            return Vec::new();
        }

        let keyword = if self.escape_wildcards {
            escape_like_wildcards(&self.keyword)
        } else {
            self.keyword.clone()
        };

        self.fields
            .iter()
            .filter_map(|field| match field.search_expr(self.backend) {
                Ok(expr) => Some(FieldClause {
                    expr,
                    patterns: keyword_patterns(&keyword, field.wildcard().unwrap_or(self.wildcard)),
                }),
                Err(error) => {
                    tracing::debug!(field = ?field, %error, "skipping unsearchable column");
                    None
                }
            })
            .collect()
    }

    fn like(&self, expr: SimpleExpr, pattern: String) -> SimpleExpr {
        if self.escape_wildcards {
            Expr::expr(expr).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
        } else {
            Expr::expr(expr).like(pattern)
        }
    }

    /// The whole search predicate, or `None` when there is nothing to search
    #[must_use]
    pub fn condition(&self) -> Option<Condition> {
        let clauses = self.clauses();
        if clauses.is_empty() {
            return None;
        }

        let mut any = Condition::any();
        for FieldClause { expr, patterns } in clauses {
            if let [pattern] = patterns.as_slice() {
                any = any.add(self.like(expr, pattern.clone()));
            } else {
                let mut group = Condition::any();
                for pattern in patterns {
                    group = group.add(self.like(expr.clone(), pattern));
                }
                any = any.add(group);
            }
        }

        Some(Condition::all().add(any))
    }

    /// AND the search onto `query`. Returns it unchanged when there is nothing to search.
    pub fn apply<Q: SearchTarget>(&self, query: Q) -> Q {
        match self.condition() {
            Some(condition) => {
                tracing::trace!(
                    keyword = %self.keyword,
                    fields = self.fields.len(),
                    "applying keyword search"
                );
                query.and_condition(condition)
            }
            None => query,
        }
    }
}
