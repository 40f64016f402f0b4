// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Admin operations over the account registry.

use crate::db::{KeyValueBackend, ProfileStore};
use crate::error::AppError;
use crate::models::{Account, AdminStats};
use crate::services::editor::{resolve_actor, Editor};
use chrono::{DateTime, Utc};

/// Admin view of the store. Can only be constructed for an admin actor.
pub struct AdminService<'a, B> {
    store: &'a ProfileStore<B>,
    admin: Account,
}

impl<'a, B: KeyValueBackend> AdminService<'a, B> {
    pub fn new(store: &'a ProfileStore<B>, actor: &Account) -> Result<Self, AppError> {
        let admin = resolve_actor(store, actor)?;
        if !admin.is_admin {
            tracing::warn!(actor = %admin.email, "Non-admin denied admin access");
            return Err(AppError::Forbidden(format!(
                "{} is not an admin",
                admin.email
            )));
        }
        Ok(Self { store, admin })
    }

    /// Accounts whose email, display name or username contains `query`
    /// (case-insensitive). A blank query matches everything.
    pub fn search(&self, query: &str) -> Result<Vec<Account>, AppError> {
        let needle = query.trim().to_lowercase();
        let accounts = self.store.list_accounts()?;
        if needle.is_empty() {
            return Ok(accounts);
        }

        Ok(accounts
            .into_iter()
            .filter(|account| {
                account.email.to_lowercase().contains(&needle)
                    || account
                        .press_kit
                        .display_name
                        .to_lowercase()
                        .contains(&needle)
                    || account.press_kit.username.to_lowercase().contains(&needle)
            })
            .collect())
    }

    pub fn stats(&self, now: DateTime<Utc>) -> Result<AdminStats, AppError> {
        Ok(AdminStats::compute(&self.store.list_accounts()?, now))
    }

    /// Delete a non-admin account. Returns `false` if it did not exist.
    pub fn delete(&self, email: &str) -> Result<bool, AppError> {
        if let Some(target) = self.store.get_by_email(email)? {
            if target.is_admin {
                return Err(AppError::Forbidden(format!(
                    "Admin account {} cannot be deleted",
                    target.email
                )));
            }
        }

        let deleted = self.store.delete_account(email)?;
        if deleted {
            tracing::info!(admin = %self.admin.email, target = email, "Admin deleted account");
        }
        Ok(deleted)
    }

    /// Open the press kit editor on any account.
    pub fn open_editor(&self, target_email: &str) -> Result<Editor<'a, B>, AppError> {
        Editor::open(self.store, &self.admin, target_email)
    }
}
