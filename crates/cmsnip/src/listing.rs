//! Searchable, paged record lists.
//!
//! Each list view searches a fixed set of fields with a case-insensitive
//! substring match and keeps records in their stored order. Deactivated
//! users never appear in the user list.

use cmsnip_seeker::{Page, Paged, Query, Value};

use crate::record::{Snippet, Template, User};

/// Fields searched in the template and snippet lists.
pub const CONTENT_SEARCH_FIELDS: [&str; 3] = ["name", "_id", "contentCreatedBy"];

/// Fields searched in the user list.
pub const USER_SEARCH_FIELDS: [&str; 3] = ["email", "role", "_id"];

/// Exposes template fields to queries.
pub fn template_accessor<'a>(template: &'a Template, field: &str) -> Value<'a> {
    match field {
        "_id" => Value::opt_str(template.id.as_deref()),
        "name" => Value::String(&template.name),
        "content" => Value::String(&template.content),
        "contentCreatedBy" => Value::opt_str(template.audit.content_created_by.as_deref()),
        "contentUpdatedBy" => Value::String(&template.audit.content_updated_by),
        "active" => Value::Bool(template.active),
        _ => Value::None,
    }
}

/// Exposes snippet fields to queries.
pub fn snippet_accessor<'a>(snippet: &'a Snippet, field: &str) -> Value<'a> {
    match field {
        "_id" => Value::opt_str(snippet.id.as_deref()),
        "name" => Value::String(&snippet.name),
        "content" => Value::String(&snippet.content),
        "templateID" => Value::opt_str(snippet.template_id.as_deref()),
        "contentCreatedBy" => Value::opt_str(snippet.audit.content_created_by.as_deref()),
        "contentUpdatedBy" => Value::String(&snippet.audit.content_updated_by),
        "active" => Value::Bool(snippet.active),
        _ => Value::None,
    }
}

/// Exposes user fields to queries.
pub fn user_accessor<'a>(user: &'a User, field: &str) -> Value<'a> {
    match field {
        "_id" => Value::opt_str(user.id.as_deref()),
        "name" => Value::opt_str(user.name.as_deref()),
        "email" => Value::String(&user.email),
        "role" => Value::String(user.role.as_str()),
        "active" => Value::Bool(user.active),
        _ => Value::None,
    }
}

/// Searches templates by name, id or creator.
pub fn search_templates<'a>(templates: &'a [Template], term: &str, page: Page) -> Paged<&'a Template> {
    Query::search(CONTENT_SEARCH_FIELDS, term).paginate(templates, template_accessor, page)
}

/// Searches snippets by name, id or creator.
pub fn search_snippets<'a>(snippets: &'a [Snippet], term: &str, page: Page) -> Paged<&'a Snippet> {
    Query::search(CONTENT_SEARCH_FIELDS, term).paginate(snippets, snippet_accessor, page)
}

/// Searches active users by email, role or id.
pub fn search_users<'a>(users: &'a [User], term: &str, page: Page) -> Paged<&'a User> {
    Query::search(USER_SEARCH_FIELDS, term)
        .and_eq("active", true)
        .paginate(users, user_accessor, page)
}

/// Snippets built from the template with the given id.
pub fn snippets_from_template<'a>(snippets: &'a [Snippet], template_id: &str) -> Vec<&'a Snippet> {
    Query::new()
        .and_eq("templateID", template_id)
        .filter(snippets, snippet_accessor)
}
