//! Seeker - search and pagination for cmSnip list views.
//!
//! List views keep records in memory and let the user narrow them with a
//! free-text search, then page through the result. Records expose their
//! fields to queries through an accessor function returning [`Value`]s.
//!
//! # Quick Start
//!
//! ```rust
//! use cmsnip_seeker::{Page, Query, Value};
//!
//! struct User {
//!     id: String,
//!     email: String,
//!     role: String,
//! }
//!
//! fn accessor<'a>(user: &'a User, field: &str) -> Value<'a> {
//!     match field {
//!         "_id" => Value::String(&user.id),
//!         "email" => Value::String(&user.email),
//!         "role" => Value::String(&user.role),
//!         _ => Value::None,
//!     }
//! }
//!
//! let users = vec![
//!     User { id: "1".into(), email: "ada@example.com".into(), role: "admin".into() },
//!     User { id: "2".into(), email: "bob@example.com".into(), role: "viewer".into() },
//! ];
//!
//! let page = Query::search(["email", "role", "_id"], "Admin")
//!     .paginate(&users, accessor, Page::default());
//!
//! assert_eq!(page.total_count, 1);
//! assert_eq!(page.items[0].email, "ada@example.com");
//! ```
//!
//! # Query Semantics
//!
//! ```text
//! match = (all AND clauses match)
//!       ∧ (at least one OR clause matches, OR no OR clauses exist)
//! ```
//!
//! A free-text search is an OR group of case-insensitive substring clauses,
//! one per searchable field. Equality filters such as `active == true` go in
//! the AND group.

mod clause;
mod error;
mod page;
mod query;
mod value;

pub use clause::ClauseValue;
pub use error::{Result, SeekerError};
pub use page::{next_page_limit, Page, Paged, PAGE_LIMITS};
pub use query::Query;
pub use value::Value;
