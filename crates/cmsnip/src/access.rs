//! Roles and the access guard.
//!
//! Every signed-in user has exactly one [`Role`]. Each [`Action`] lists the
//! roles allowed to perform it; [`authorize`] is the single check callers
//! make before letting an action through.
//!
//! | Action | Roles |
//! |--------|-------|
//! | `ListContent`, `ListUsers` | every role |
//! | `OpenEditor` | admin, editor, viewer |
//! | `ViewContent`, `CreateContent`, `UpdateContent`, `DeleteContent` | admin, editor |
//! | `ManageUsers` | admin |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;

/// A user's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Guest,
    #[default]
    Viewer,
    Editor,
    Admin,
}

impl Role {
    /// All roles, least privileged first.
    pub const ALL: [Role; 4] = [Role::Guest, Role::Viewer, Role::Editor, Role::Admin];

    /// Returns the stored name of this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Viewer => "viewer",
            Role::Editor => "editor",
            Role::Admin => "admin",
        }
    }

    /// Returns `true` if this role may perform `action`.
    pub fn can(self, action: Action) -> bool {
        action.allowed_roles().contains(&self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown role '{}'", s))
    }
}

/// Something a user can attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Browse template and snippet lists.
    ListContent,
    /// Open a single template or snippet.
    ViewContent,
    /// Create a template or snippet.
    CreateContent,
    /// Update a template or snippet.
    UpdateContent,
    /// Delete a template or snippet.
    DeleteContent,
    /// Open the snippet editing pages.
    OpenEditor,
    /// Browse the user list.
    ListUsers,
    /// Read, change the role of, or delete another user.
    ManageUsers,
}

impl Action {
    /// Roles allowed to perform this action.
    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Action::ListContent | Action::ListUsers => &Role::ALL,
            Action::OpenEditor => &[Role::Admin, Role::Editor, Role::Viewer],
            Action::ViewContent
            | Action::CreateContent
            | Action::UpdateContent
            | Action::DeleteContent => &[Role::Admin, Role::Editor],
            Action::ManageUsers => &[Role::Admin],
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Action::ListContent => "list content",
            Action::ViewContent => "view content",
            Action::CreateContent => "create content",
            Action::UpdateContent => "update content",
            Action::DeleteContent => "delete content",
            Action::OpenEditor => "open the editor",
            Action::ListUsers => "list users",
            Action::ManageUsers => "manage users",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Checks that `role` may perform `action`.
pub fn authorize(role: Role, action: Action) -> Result<(), AccessError> {
    if role.can(action) {
        Ok(())
    } else {
        log::debug!("denied {} for role {}", action, role);
        Err(AccessError::Forbidden { role, action })
    }
}
