use std::fmt;

/// Why a column specifier cannot be searched or ordered on.
///
/// These never escape [`Searchable::apply`](crate::Searchable::apply) or
/// [`Orderable::apply`](crate::Orderable::apply); an invalid field is logged and skipped.
/// Call [`Field::validate`](crate::Field::validate) to check a specifier up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The specifier was an empty string
    Empty,
    /// The column part is not a (possibly dotted) identifier
    InvalidColumn(String),
    /// One of the `->` path keys is not an identifier
    InvalidJsonPath {
        /// Base column the path was applied to
        column: String,
        /// Full key path as given, without the leading `->`
        path: String,
    },
    /// More than `schema.table.column`
    TooManySegments(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "column specifier is empty"),
            Self::InvalidColumn(column) => write!(f, "invalid column name: {column:?}"),
            Self::InvalidJsonPath { column, path } => {
                write!(f, "invalid JSON path {path:?} on column {column:?}")
            }
            Self::TooManySegments(column) => {
                write!(f, "column {column:?} has more than three segments")
            }
        }
    }
}

impl std::error::Error for FieldError {}
