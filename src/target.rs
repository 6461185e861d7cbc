use sea_orm::{
    Condition, DeleteMany, EntityTrait, Order, QueryFilter, QueryOrder, Select, UpdateMany,
    sea_query::{ConditionalStatement, OrderedStatement, SelectStatement, SimpleExpr},
};

/// A query that a search predicate can be ANDed onto.
///
/// Implemented for the Sea-ORM statements that support `filter` and for a raw
/// SeaQuery `SelectStatement`, either owned or borrowed mutably.
pub trait SearchTarget: Sized {
    /// AND `condition` with whatever the query already filters on
    #[must_use]
    fn and_condition(self, condition: Condition) -> Self;
}

/// A query that can take an extra `ORDER BY` term.
pub trait OrderTarget: Sized {
    #[must_use]
    fn order_by_expr(self, expr: SimpleExpr, order: Order) -> Self;
}

impl<E: EntityTrait> SearchTarget for Select<E> {
    fn and_condition(self, condition: Condition) -> Self {
        self.filter(condition)
    }
}

impl<E: EntityTrait> SearchTarget for UpdateMany<E> {
    fn and_condition(self, condition: Condition) -> Self {
        self.filter(condition)
    }
}

impl<E: EntityTrait> SearchTarget for DeleteMany<E> {
    fn and_condition(self, condition: Condition) -> Self {
        self.filter(condition)
    }
}

impl SearchTarget for SelectStatement {
    fn and_condition(mut self, condition: Condition) -> Self {
        ConditionalStatement::cond_where(&mut self, condition);
        self
    }
}

impl SearchTarget for &mut SelectStatement {
    fn and_condition(self, condition: Condition) -> Self {
        ConditionalStatement::cond_where(self, condition)
    }
}

impl<E: EntityTrait> OrderTarget for Select<E> {
    fn order_by_expr(self, expr: SimpleExpr, order: Order) -> Self {
        self.order_by(expr, order)
    }
}

impl OrderTarget for SelectStatement {
    fn order_by_expr(mut self, expr: SimpleExpr, order: Order) -> Self {
        OrderedStatement::order_by_expr(&mut self, expr, order);
        self
    }
}

impl OrderTarget for &mut SelectStatement {
    fn order_by_expr(self, expr: SimpleExpr, order: Order) -> Self {
        OrderedStatement::order_by_expr(self, expr, order)
    }
}
