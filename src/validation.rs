//! Identifier checks for column specifiers.
//!
//! Anything that ends up interpolated into SQL as a column name or JSON key
//! must pass these checks first. The grammar is deliberately narrow: ASCII
//! letters, digits and underscores, with `.` only as a qualifier separator.

use crate::errors::FieldError;

/// `schema.table.column` is as deep as a sea-query column reference goes
pub const MAX_COLUMN_SEGMENTS: usize = 3;

/// A single identifier: one or more of `[A-Za-z0-9_]`
#[must_use]
pub fn is_valid_identifier(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// A plain or qualified column name, e.g. `name` or `users.name`
#[must_use]
pub fn is_valid_column(column: &str) -> bool {
    column.split('.').all(is_valid_identifier)
}

/// Split a column into its qualifier segments, rejecting anything unsafe
pub(crate) fn column_segments(column: &str) -> Result<Vec<&str>, FieldError> {
    if column.is_empty() {
        return Err(FieldError::Empty);
    }
    if !is_valid_column(column) {
        return Err(FieldError::InvalidColumn(column.to_string()));
    }

    let segments: Vec<&str> = column.split('.').collect();
    if segments.len() > MAX_COLUMN_SEGMENTS {
        return Err(FieldError::TooManySegments(column.to_string()));
    }
    Ok(segments)
}

/// Split a `->` key path into keys, each of which must be a bare identifier
pub(crate) fn json_path_segments<'a>(
    column: &str,
    path: &'a str,
) -> Result<Vec<&'a str>, FieldError> {
    let keys: Vec<&str> = path.split("->").collect();
    if keys.iter().all(|key| is_valid_identifier(key)) {
        Ok(keys)
    } else {
        Err(FieldError::InvalidJsonPath {
            column: column.to_string(),
            path: path.to_string(),
        })
    }
}
