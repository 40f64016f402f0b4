// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Press kit editor.
//!
//! An editor is opened for an explicit target account. Admins may open any
//! account's kit; everyone else only their own. The editor works on a copy
//! and writes it back through `ProfileStore::update_profile` on save.

use crate::db::{KeyValueBackend, ProfileStore};
use crate::error::AppError;
use crate::models::account::same_email;
use crate::models::{Account, PressKit, PressPhoto};
use crate::services::gemini::GeneratedKit;

/// Working copy of one account's press kit.
pub struct Editor<'a, B> {
    store: &'a ProfileStore<B>,
    target_email: String,
    /// Kit as loaded, used to scope validation to edited fields
    loaded: PressKit,
    kit: PressKit,
}

impl<'a, B: KeyValueBackend> Editor<'a, B> {
    /// Open the editor on `target_email` on behalf of `actor`.
    ///
    /// The actor is re-read from the store so a stale admin flag is not
    /// trusted.
    pub fn open(
        store: &'a ProfileStore<B>,
        actor: &Account,
        target_email: &str,
    ) -> Result<Self, AppError> {
        let actor = resolve_actor(store, actor)?;

        if !actor.is_admin && !same_email(&actor.email, target_email) {
            tracing::warn!(
                actor = %actor.email,
                target = target_email,
                "Refused to open editor on another account"
            );
            return Err(AppError::Forbidden(format!(
                "{} may not edit {}",
                actor.email, target_email
            )));
        }

        let target = store
            .get_by_email(target_email)?
            .ok_or_else(|| AppError::NotFound(format!("Account {}", target_email)))?;

        if !same_email(&actor.email, &target.email) {
            tracing::info!(actor = %actor.email, target = %target.email, "Admin opened editor");
        }

        Ok(Self {
            store,
            target_email: target.email,
            kit: target.press_kit.clone(),
            loaded: target.press_kit,
        })
    }

    /// Email of the account being edited.
    pub fn target_email(&self) -> &str {
        &self.target_email
    }

    pub fn kit(&self) -> &PressKit {
        &self.kit
    }

    pub fn kit_mut(&mut self) -> &mut PressKit {
        &mut self.kit
    }

    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.kit.bio = bio.into();
    }

    pub fn add_photo(&mut self, photo: PressPhoto) {
        self.kit.photos.push(photo);
    }

    /// Overlay fields produced by the text-generation service.
    pub fn apply_generated(&mut self, generated: GeneratedKit) {
        generated.merge_into(&mut self.kit);
    }

    /// Validate the edited fields and persist the working copy.
    ///
    /// Fails with `NotFound` if the target account was deleted meanwhile.
    pub fn save(&self) -> Result<(), AppError> {
        self.kit.validate_changes(&self.loaded)?;

        if !self.store.update_profile(&self.target_email, self.kit.clone())? {
            return Err(AppError::NotFound(format!(
                "Account {}",
                self.target_email
            )));
        }
        Ok(())
    }
}

/// Re-read `actor` from the store; unknown actors are refused.
pub(crate) fn resolve_actor<B: KeyValueBackend>(
    store: &ProfileStore<B>,
    actor: &Account,
) -> Result<Account, AppError> {
    store
        .get_by_email(&actor.email)?
        .ok_or_else(|| AppError::Forbidden(format!("Unknown actor {}", actor.email)))
}
