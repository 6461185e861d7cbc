//! Keyword search and column ordering for Sea-ORM and SeaQuery queries.
//!
//! ```rust
//! use query_filter::{Field, Searchable};
//! use sea_orm::sea_query::{Alias, Asterisk, Query};
//!
//! let query = Query::select().column(Asterisk).from(Alias::new("users")).to_owned();
//!
//! let query = Searchable::new(
//!     "hello",
//!     [Field::new("name"), Field::new("address->postcode"), Field::raw("users.email")],
//! )
//! .apply(query);
//! ```

pub mod errors;
pub mod field;
mod json;
pub mod models;
pub mod search;
pub mod sort;
pub mod target;
pub mod validation;

pub use errors::FieldError;
pub use field::Field;
pub use models::SearchOptions;
pub use search::Searchable;
pub use sort::Orderable;
pub use target::{OrderTarget, SearchTarget};
