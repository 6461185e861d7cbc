use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    field::Field,
    search::Searchable,
    sort::{Orderable, parse_sort},
};

/// Query parameters for keyword search and sorting.
///
/// # Searching
/// The `q` parameter is the keyword matched against the searchable columns.
/// A missing or blank `q` means no search is applied.
///
/// # Sorting
/// The `sort` parameter is either a JSON array with the column name and sort order, for example:
/// ```json
/// ["name", "DESC"]
/// ```
/// or a bare column name, with the direction given separately in `order`.
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema, Default)]
#[into_params(parameter_in = Query)]
pub struct SearchOptions {
    /// Keyword to search for.
    ///
    /// Example: `hello`
    #[param(example = "hello")]
    pub q: Option<String>,
    /// Sort column, either `name` or `["name", "DESC"]`.
    #[param(example = r#"["name", "ASC"]"#)]
    pub sort: Option<String>,
    /// Sort direction when `sort` is a bare column name: `ASC` or `DESC`.
    #[param(example = "DESC")]
    pub order: Option<String>,
}

impl SearchOptions {
    /// Search `q` across `columns`
    pub fn searchable<I, F>(&self, columns: I) -> Searchable
    where
        I: IntoIterator<Item = F>,
        F: Into<Field>,
    {
        Searchable::new(self.q.as_deref().unwrap_or_default(), columns)
    }

    /// Ordering requested by `sort`/`order`, if any
    #[must_use]
    pub fn orderable(&self) -> Option<Orderable> {
        let (column, order) = parse_sort(self.sort.as_deref()?, self.order.as_deref())?;
        Some(Orderable::new(column, order))
    }
}
