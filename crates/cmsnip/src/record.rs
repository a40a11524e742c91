//! Stored records: templates, snippets and users.
//!
//! Field names follow the stored documents (`_id`, `contentCreatedBy`,
//! `templateID`, ...) so records round-trip through JSON unchanged.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use cmsnip_template::FormData;

use crate::access::Role;

/// Placeholder stored in update stamps until the first update.
pub const NO_CHANGES: &str = "No Changes";

/// Formats a timestamp the way audit stamps store it: `17/10/2026, 14:03:22`.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format("%d/%m/%Y, %H:%M:%S").to_string()
}

fn no_changes() -> String {
    NO_CHANGES.to_string()
}

fn default_true() -> bool {
    true
}

/// Who created and last updated a content record, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_created_by: Option<String>,
    #[serde(default = "no_changes")]
    pub content_updated_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_created_at: Option<String>,
    #[serde(default = "no_changes")]
    pub content_updated_at: String,
}

impl Default for Audit {
    fn default() -> Self {
        Audit {
            content_created_by: None,
            content_updated_by: no_changes(),
            content_created_at: None,
            content_updated_at: no_changes(),
        }
    }
}

impl Audit {
    /// Records the creator and creation time.
    pub fn stamp_created<Tz>(&mut self, by: &str, at: &DateTime<Tz>)
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.content_created_by = Some(by.to_string());
        self.content_created_at = Some(format_timestamp(at));
    }

    /// Records the latest editor and update time.
    pub fn stamp_updated<Tz>(&mut self, by: &str, at: &DateTime<Tz>)
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        self.content_updated_by = by.to_string();
        self.content_updated_at = format_timestamp(at);
    }

    /// Returns `true` once the record has been updated after creation.
    pub fn is_updated(&self) -> bool {
        self.content_updated_by != NO_CHANGES
    }
}

/// A reusable HTML template with `{{label}}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub content: String,
    #[serde(flatten)]
    pub audit: Audit,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Template {
    /// Creates an active, unsaved template.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Template {
            id: None,
            name: name.into(),
            content: content.into(),
            audit: Audit::default(),
            active: true,
        }
    }

    /// Sets the stored id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// A stored piece of content, free-form or instantiated from a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub content: String,
    /// Field values the content was rendered from, keyed by label.
    #[serde(default)]
    pub fields: FormData,
    #[serde(rename = "templateID", default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(flatten)]
    pub audit: Audit,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Snippet {
    /// Creates an active, unsaved free-form snippet.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Snippet {
            id: None,
            name: name.into(),
            content: content.into(),
            fields: FormData::new(),
            template_id: None,
            audit: Audit::default(),
            active: true,
        }
    }

    /// Sets the stored id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns `true` if this snippet was built from a template.
    pub fn is_templated(&self) -> bool {
        self.template_id.is_some()
    }
}

/// A signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl User {
    /// Creates an active user; the email is stored lowercased.
    pub fn new(email: &str, role: Role) -> Self {
        User {
            id: None,
            name: None,
            email: email.trim().to_lowercase(),
            role,
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn timestamp_format() {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 9, 5, 3).unwrap();
        assert_eq!(format_timestamp(&at), "17/10/2026, 09:05:03");
    }

    #[test]
    fn timestamp_uses_local_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let at = offset.with_ymd_and_hms(2026, 1, 2, 23, 0, 0).unwrap();
        assert_eq!(format_timestamp(&at), "02/01/2026, 23:00:00");
    }

    #[test]
    fn audit_defaults() {
        let audit = Audit::default();
        assert_eq!(audit.content_updated_by, NO_CHANGES);
        assert_eq!(audit.content_updated_at, NO_CHANGES);
        assert!(!audit.is_updated());
    }

    #[test]
    fn audit_stamps() {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
        let mut audit = Audit::default();

        audit.stamp_created("ada@example.com", &at);
        assert_eq!(audit.content_created_by.as_deref(), Some("ada@example.com"));
        assert!(!audit.is_updated());

        audit.stamp_updated("bob@example.com", &at);
        assert!(audit.is_updated());
        assert_eq!(audit.content_updated_at, "17/10/2026, 12:00:00");
    }

    #[test]
    fn snippet_document_shape() {
        let json = r#"{
            "_id": "s1",
            "name": "Welcome",
            "content": "<p>Hi Ada</p>",
            "fields": {"Name": "Ada"},
            "templateID": "t1",
            "contentCreatedBy": "ada@example.com",
            "active": false
        }"#;

        let snippet: Snippet = serde_json::from_str(json).unwrap();
        assert_eq!(snippet.id.as_deref(), Some("s1"));
        assert_eq!(snippet.template_id.as_deref(), Some("t1"));
        assert_eq!(snippet.fields["Name"], "Ada");
        assert_eq!(snippet.audit.content_updated_by, NO_CHANGES);
        assert!(!snippet.active);

        let back = serde_json::to_value(&snippet).unwrap();
        assert_eq!(back["templateID"], "t1");
        assert_eq!(back["contentCreatedBy"], "ada@example.com");
        assert_eq!(back["contentUpdatedAt"], NO_CHANGES);
    }

    #[test]
    fn template_defaults_active() {
        let template: Template =
            serde_json::from_str(r#"{"name": "T", "content": "{{X}}"}"#).unwrap();
        assert!(template.active);
        assert!(template.id.is_none());
    }

    #[test]
    fn user_role_defaults_to_viewer() {
        let user: User = serde_json::from_str(r#"{"email": "a@b.c"}"#).unwrap();
        assert_eq!(user.role, Role::Viewer);
    }

    #[test]
    fn user_email_is_lowercased() {
        assert_eq!(User::new(" Ada@Example.COM ", Role::Admin).email, "ada@example.com");
    }
}
