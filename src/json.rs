//! Per-dialect SQL for reading a text value out of a JSON column.

use sea_orm::{
    DatabaseBackend,
    sea_query::{Alias, BinOper, Expr, Func, SimpleExpr},
};

/// `$."a"."b"` path literal understood by SQLite and MySQL `json_extract`
fn json_path_literal(keys: &[&str]) -> String {
    let mut path = String::from("'$");
    for key in keys {
        path.push_str(".\"");
        path.push_str(key);
        path.push('"');
    }
    path.push('\'');
    path
}

/// Extract the value at `keys` inside `column` as text.
///
/// Keys are written into the SQL as literals rather than bound, so they must
/// already have passed [`is_valid_identifier`](crate::validation::is_valid_identifier).
pub(crate) fn json_text_expr(
    column: SimpleExpr,
    keys: &[&str],
    backend: DatabaseBackend,
) -> SimpleExpr {
    match backend {
        DatabaseBackend::Postgres => {
            // ("col" -> ('a')) ->> ('b'): sea-query parenthesizes custom operator operands
            let last = keys.len().saturating_sub(1);
            keys.iter().enumerate().fold(column, |expr, (i, key)| {
                let op = if i == last { "->>" } else { "->" };
                Expr::expr(expr).binary(BinOper::Custom(op), Expr::cust(format!("'{key}'")))
            })
        }
        DatabaseBackend::MySql => Func::cust(Alias::new("JSON_UNQUOTE"))
            .arg(
                Func::cust(Alias::new("JSON_EXTRACT"))
                    .arg(column)
                    .arg(Expr::cust(json_path_literal(keys))),
            )
            .into(),
        _ => Func::cust(Alias::new("json_extract"))
            .arg(column)
            .arg(Expr::cust(json_path_literal(keys)))
            .into(),
    }
}

/// Case-folded variant used for keyword matching
pub(crate) fn json_search_expr(
    column: SimpleExpr,
    keys: &[&str],
    backend: DatabaseBackend,
) -> SimpleExpr {
    Func::lower(json_text_expr(column, keys, backend)).into()
}
