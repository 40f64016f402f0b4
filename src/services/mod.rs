// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod admin;
pub mod editor;
pub mod gemini;

pub use admin::AdminService;
pub use editor::Editor;
pub use gemini::{BioRequest, DumpRequest, GeminiClient, GeneratedKit};
