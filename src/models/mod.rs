// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod account;
pub mod press_kit;
pub mod stats;

pub use account::{Account, RememberedAccount, SessionRecord};
pub use press_kit::{
    Achievement, MusicEmbed, MusicPlatform, PressKit, PressPhoto, Release, SocialLinks,
    VideoEntry,
};
pub use stats::AdminStats;
