// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! djpress: press kits for electronic-music artists
//!
//! This crate provides the profile store behind the press kit editor and
//! public artist pages: accounts, the active session, remembered logins and
//! the text-generation helpers that fill in a kit.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod time_utils;

use config::Config;
use db::{FileBackend, ProfileStore};
use error::AppError;
use services::GeminiClient;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: ProfileStore<FileBackend>,
    pub gemini: GeminiClient,
}

impl AppState {
    /// Open the file-backed store in the configured data directory.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let store = ProfileStore::new(FileBackend::open(&config.data_dir)?, &config.admin_email);
        let gemini = GeminiClient::from_config(&config);

        if gemini.is_offline() {
            tracing::warn!("No text-generation API key configured, AI features disabled");
        }

        Ok(Self {
            config,
            store,
            gemini,
        })
    }
}
