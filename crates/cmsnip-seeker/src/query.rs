//! Query builder and executor.

use crate::clause::{Clause, ClauseValue, Op};
use crate::page::{Page, Paged};
use crate::value::Value;

/// A query for filtering and paging record lists.
///
/// Queries consist of two clause groups:
/// - **AND**: All clauses must match
/// - **OR**: At least one clause must match (or none if empty)
///
/// ```text
/// match = (all AND clauses match)
///       ∧ (at least one OR clause matches, OR no OR clauses exist)
/// ```
///
/// Matches keep their input order.
///
/// # Example
///
/// ```
/// use cmsnip_seeker::{Page, Query, Value};
///
/// struct User {
///     email: String,
///     active: bool,
/// }
///
/// fn accessor<'a>(u: &'a User, field: &str) -> Value<'a> {
///     match field {
///         "email" => Value::String(&u.email),
///         "active" => Value::Bool(u.active),
///         _ => Value::None,
///     }
/// }
///
/// let users = vec![
///     User { email: "ada@example.com".into(), active: true },
///     User { email: "bob@example.com".into(), active: true },
///     User { email: "ada@example.org".into(), active: false },
/// ];
///
/// let query = Query::search(["email"], "ADA").and_eq("active", true);
///
/// let page = query.paginate(&users, accessor, Page::default());
/// assert_eq!(page.total_count, 1);
/// assert_eq!(page.items[0].email, "ada@example.com");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Query {
    and_clauses: Vec<Clause>,
    or_clauses: Vec<Clause>,
}

impl Query {
    /// Creates a new empty query, which matches every record.
    pub fn new() -> Self {
        Query::default()
    }

    /// A free-text search across `fields`.
    ///
    /// Adds one case-insensitive OR clause per field. A blank term adds
    /// nothing, so it matches everything.
    pub fn search<'f>(fields: impl IntoIterator<Item = &'f str>, term: &str) -> Self {
        let term = term.trim();
        if term.is_empty() {
            return Query::new();
        }
        fields
            .into_iter()
            .fold(Query::new(), |query, field| query.or_icontains(field, term))
    }

    /// Adds an AND equality clause.
    pub fn and_eq(mut self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and_clauses.push(Clause::new(field, Op::Eq, value));
        self
    }

    /// Adds an OR case-insensitive contains clause.
    pub fn or_icontains(mut self, field: &str, value: &str) -> Self {
        self.or_clauses.push(Clause::new(field, Op::IContains, value));
        self
    }

    /// Tests if a single record matches this query.
    pub fn matches<T, F>(&self, item: &T, accessor: F) -> bool
    where
        for<'a> F: Fn(&'a T, &str) -> Value<'a>,
    {
        let and_pass = self
            .and_clauses
            .iter()
            .all(|clause| clause.matches(&accessor(item, &clause.field)));

        and_pass
            && (self.or_clauses.is_empty()
                || self
                    .or_clauses
                    .iter()
                    .any(|clause| clause.matches(&accessor(item, &clause.field))))
    }

    /// Filters a slice, returning matching records in input order.
    pub fn filter<'a, T, F>(&self, items: &'a [T], accessor: F) -> Vec<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &accessor))
            .collect()
    }

    /// Filters, then returns one page with totals.
    pub fn paginate<'a, T, F>(&self, items: &'a [T], accessor: F, page: Page) -> Paged<&'a T>
    where
        for<'b> F: Fn(&'b T, &str) -> Value<'b>,
    {
        Paged::from_matches(self.filter(items, accessor), page)
    }
}
