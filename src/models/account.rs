//! Account, session and remembered-account models.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::press_kit::{new_entry_id, username_from_email, PressKit};

/// Case-insensitive email comparison, ignoring surrounding whitespace.
pub fn same_email(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// An email-identified owner of exactly one press kit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub struct Account {
    /// Generated opaque id
    pub id: String,
    /// Login email, stored lowercased
    pub email: String,
    pub is_admin: bool,
    pub press_kit: PressKit,
    /// When the account was provisioned (RFC 3339, UTC)
    pub created_at: String,
}

impl Account {
    /// Provision a new account with a blank press kit.
    pub fn provision(email: &str, is_admin: bool, created_at: String) -> Self {
        let email = email.trim().to_lowercase();
        let username = username_from_email(&email);
        Self {
            id: new_entry_id(),
            press_kit: PressKit::blank_for(&username, &email),
            email,
            is_admin,
            created_at,
        }
    }

    /// Case-insensitive email match.
    pub fn has_email(&self, email: &str) -> bool {
        same_email(&self.email, email)
    }

    /// Case-insensitive username match.
    pub fn has_username(&self, username: &str) -> bool {
        self.press_kit.username.to_lowercase() == username.trim().to_lowercase()
    }
}

/// Display hint for a previously used login, shown in the account picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub struct RememberedAccount {
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl RememberedAccount {
    pub fn from_account(account: &Account) -> Self {
        Self {
            email: account.email.clone(),
            name: account.press_kit.display_name.clone(),
            avatar: account.press_kit.avatar_url().map(str::to_string),
        }
    }

    /// Refresh the cached name and avatar from a press kit.
    pub fn refresh_from(&mut self, kit: &PressKit) {
        self.name = kit.display_name.clone();
        self.avatar = kit.avatar_url().map(str::to_string);
    }
}

/// Persisted pointer to the active account.
///
/// Only the email is stored; the live account is resolved on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub email: String,
    /// When the session started (RFC 3339, UTC)
    #[serde(default)]
    pub started_at: String,
}
