// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile store: accounts, the active session and remembered logins.
//!
//! Every operation reads or rewrites a whole slot; there is no indexing.
//! Lookups that find nothing return `None` rather than an error. Errors only
//! come from the backend (I/O failure, corrupt JSON).

use crate::db::backend::KeyValueBackend;
use crate::db::keys;
use crate::error::AppError;
use crate::models::account::same_email;
use crate::models::{Account, PressKit, RememberedAccount, SessionRecord};
use crate::time_utils::now_rfc3339;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Sole authority over persisted accounts, the session and remembered logins.
#[derive(Clone)]
pub struct ProfileStore<B> {
    backend: B,
    /// Lowercased email that is provisioned as admin
    admin_email: String,
}

impl<B: KeyValueBackend> ProfileStore<B> {
    /// Create a store over `backend`. `admin_email` is matched case-insensitively.
    pub fn new(backend: B, admin_email: &str) -> Self {
        Self {
            backend,
            admin_email: admin_email.trim().to_lowercase(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    // ─── Accounts ────────────────────────────────────────────────

    /// All registered accounts. Empty when nothing has been stored yet.
    pub fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        self.read_list(keys::ACCOUNTS)
    }

    /// Press kits eligible for the public directory, in account order.
    pub fn list_public_profiles(&self) -> Result<Vec<PressKit>, AppError> {
        Ok(self
            .list_accounts()?
            .into_iter()
            .map(|account| account.press_kit)
            .filter(PressKit::is_public)
            .collect())
    }

    /// Find an account by email (case-insensitive).
    pub fn get_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        Ok(self
            .list_accounts()?
            .into_iter()
            .find(|account| account.has_email(email)))
    }

    /// Find an account by its press kit username (case-insensitive).
    pub fn get_by_username(&self, username: &str) -> Result<Option<Account>, AppError> {
        Ok(self
            .list_accounts()?
            .into_iter()
            .find(|account| account.has_username(username)))
    }

    /// Upsert by email: replaces an existing account with the same email,
    /// otherwise appends. The record's shape is not validated.
    pub fn save_account(&self, account: &Account) -> Result<(), AppError> {
        let mut accounts = self.list_accounts()?;
        match accounts.iter_mut().find(|a| a.has_email(&account.email)) {
            Some(existing) => *existing = account.clone(),
            None => accounts.push(account.clone()),
        }
        self.write_list(keys::ACCOUNTS, &accounts)?;
        tracing::debug!(email = %account.email, total = accounts.len(), "Saved account");
        Ok(())
    }

    /// Replace the press kit of the account owning `email`.
    ///
    /// Also refreshes the remembered-account name and avatar. Returns `false`
    /// (and writes nothing) when no account has this email.
    pub fn update_profile(&self, email: &str, kit: PressKit) -> Result<bool, AppError> {
        let Some(mut account) = self.get_by_email(email)? else {
            tracing::debug!(email, "Profile update for unknown account ignored");
            return Ok(false);
        };

        account.press_kit = kit;
        self.save_account(&account)?;

        let mut remembered = self.remembered_accounts()?;
        if let Some(entry) = remembered
            .iter_mut()
            .find(|entry| same_email(&entry.email, &account.email))
        {
            entry.refresh_from(&account.press_kit);
            self.write_list(keys::REMEMBERED, &remembered)?;
        }

        tracing::info!(
            email = %account.email,
            username = %account.press_kit.username,
            "Press kit updated"
        );
        Ok(true)
    }

    /// Remove an account, its remembered entry and, if it is the active one,
    /// the session. Returns `false` when no account had this email.
    pub fn delete_account(&self, email: &str) -> Result<bool, AppError> {
        let mut accounts = self.list_accounts()?;
        let before = accounts.len();
        accounts.retain(|account| !account.has_email(email));
        let removed = accounts.len() != before;
        if removed {
            self.write_list(keys::ACCOUNTS, &accounts)?;
        }

        let mut remembered = self.remembered_accounts()?;
        let remembered_before = remembered.len();
        remembered.retain(|entry| !same_email(&entry.email, email));
        if remembered.len() != remembered_before {
            self.write_list(keys::REMEMBERED, &remembered)?;
        }

        if let Some(session) = self.read_session_record()? {
            if same_email(&session.email, email) {
                self.backend.remove(keys::SESSION)?;
                tracing::debug!(email, "Cleared session of deleted account");
            }
        }

        if removed {
            tracing::info!(email, "Account deleted");
        }
        Ok(removed)
    }

    // ─── Session ─────────────────────────────────────────────────

    /// Log in as `email`, provisioning a new account on first use.
    ///
    /// There is no credential check. The account is added to the remembered
    /// list (if not already there) and becomes the active session.
    pub fn login(&self, email: &str) -> Result<Account, AppError> {
        let email = email.trim().to_lowercase();

        let account = match self.get_by_email(&email)? {
            Some(account) => account,
            None => {
                let is_admin = email == self.admin_email;
                let account = Account::provision(&email, is_admin, now_rfc3339());
                self.save_account(&account)?;
                tracing::info!(
                    email = %account.email,
                    username = %account.press_kit.username,
                    is_admin,
                    "Provisioned new account"
                );
                account
            }
        };

        let mut remembered = self.remembered_accounts()?;
        if !remembered.iter().any(|entry| same_email(&entry.email, &email)) {
            remembered.push(RememberedAccount::from_account(&account));
            self.write_list(keys::REMEMBERED, &remembered)?;
        }

        let session = SessionRecord {
            email: account.email.clone(),
            started_at: now_rfc3339(),
        };
        self.backend
            .set(keys::SESSION, &serde_json::to_string(&session)?)?;

        tracing::info!(email = %account.email, "Logged in");
        Ok(account)
    }

    /// Clear the active session.
    pub fn logout(&self) -> Result<(), AppError> {
        self.backend.remove(keys::SESSION)?;
        tracing::debug!("Logged out");
        Ok(())
    }

    /// The account of the active session, resolved from the live collection.
    ///
    /// A session pointing at an account that no longer exists is cleared and
    /// reported as `None`.
    pub fn current_session(&self) -> Result<Option<Account>, AppError> {
        let Some(session) = self.read_session_record()? else {
            return Ok(None);
        };

        match self.get_by_email(&session.email)? {
            Some(account) => {
                tracing::debug!(
                    email = %account.email,
                    started_at = %session.started_at,
                    "Resolved session"
                );
                Ok(Some(account))
            }
            None => {
                tracing::warn!(
                    email = %session.email,
                    started_at = %session.started_at,
                    "Session references a missing account, clearing"
                );
                self.backend.remove(keys::SESSION)?;
                Ok(None)
            }
        }
    }

    /// Cached login hints, possibly empty.
    pub fn remembered_accounts(&self) -> Result<Vec<RememberedAccount>, AppError> {
        self.read_list(keys::REMEMBERED)
    }

    // ─── Helper Methods ──────────────────────────────────────────

    fn read_session_record(&self) -> Result<Option<SessionRecord>, AppError> {
        match self.backend.get(keys::SESSION)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn read_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, AppError> {
        match self.backend.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| AppError::Storage(format!("Corrupt slot '{}': {}", key, e))),
            None => Ok(Vec::new()),
        }
    }

    fn write_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), AppError> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(key, &raw)
    }
}
