// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Text-generation API client for filling in press kits.
//!
//! Handles:
//! - Biography generation from a name, genres and keywords
//! - Parsing an unstructured info dump into press kit fields
//! - Offline mode when no API key is configured
//! - Rate limit detection (429)
//!
//! Calls are one-shot: no retry and no timeout beyond the HTTP client's.

use crate::config::Config;
use crate::error::AppError;
use crate::models::press_kit::new_entry_id;
use crate::models::{Achievement, MusicEmbed, MusicPlatform, PressKit, SocialLinks, VideoEntry};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use validator::{Validate, ValidationError};

/// Shown when the model returns no text for a biography.
pub const BIO_EMPTY_MESSAGE: &str = "Failed to generate bio.";

/// Shown in place of a biography when the request fails.
pub const BIO_ERROR_MESSAGE: &str = "Error generating bio. Please try again later.";

/// Input for biography generation.
#[derive(Debug, Clone, Validate)]
pub struct BioRequest {
    /// Artist display name
    pub name: String,
    pub genres: Vec<String>,
    /// Free-text details to weave into the bio
    #[validate(custom(function = "not_blank"))]
    pub keywords: String,
}

/// Input for parsing an unstructured dump.
#[derive(Debug, Clone, Validate)]
pub struct DumpRequest {
    #[validate(custom(function = "not_blank"))]
    pub input: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Text-generation API client.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    /// None = offline, every call fails
    api_key: Option<String>,
    bio_model: String,
    parse_model: String,
}

impl GeminiClient {
    /// Create a client from application config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.gemini_base_url.clone(),
            api_key: config.gemini_api_key.clone(),
            bio_model: config.bio_model.clone(),
            parse_model: config.parse_model.clone(),
        }
    }

    /// Create an offline client for testing. All calls return an error.
    pub fn new_offline() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn is_offline(&self) -> bool {
        self.api_key.is_none()
    }

    /// Generate a two-paragraph press biography.
    pub async fn generate_bio(&self, request: &BioRequest) -> Result<String, AppError> {
        request.validate()?;

        let body = json!({
            "contents": [{ "parts": [{ "text": bio_prompt(request) }] }],
            "generationConfig": {
                "temperature": 0.7,
                "topP": 0.9,
            }
        });

        let response = self.generate_content(&self.bio_model, &body).await?;
        Ok(response
            .text()
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| BIO_EMPTY_MESSAGE.to_string()))
    }

    /// Generate a biography, falling back to [`BIO_ERROR_MESSAGE`] on failure.
    pub async fn generate_bio_or_fallback(&self, request: &BioRequest) -> String {
        match self.generate_bio(request).await {
            Ok(bio) => bio,
            Err(e) => {
                tracing::warn!(error = %e, name = %request.name, "Bio generation failed");
                BIO_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// Organize an unstructured dump into press kit fields.
    pub async fn parse_dump(&self, request: &DumpRequest) -> Result<GeneratedKit, AppError> {
        request.validate()?;

        let body = json!({
            "contents": [{ "parts": [{ "text": dump_prompt(&request.input) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": press_kit_schema(),
            }
        });

        let response = self.generate_content(&self.parse_model, &body).await?;
        let text = response.text().unwrap_or_else(|| "{}".to_string());

        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!(error = %e, "Structured response did not match schema");
            AppError::Generation(format!("Malformed structured response: {}", e))
        })
    }

    /// POST a generateContent request for `model`.
    async fn generate_content(
        &self,
        model: &str,
        body: &Value,
    ) -> Result<GenerateContentResponse, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Generation(AppError::GENERATION_OFFLINE.to_string()))?;

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url,
            urlencoding::encode(model)
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::Generation(e.to_string()))?;

        self.check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            if status.as_u16() == 429 {
                tracing::warn!("Text generation rate limit hit (429)");
                return Err(AppError::Generation(
                    AppError::GENERATION_RATE_LIMIT.to_string(),
                ));
            }

            return Err(AppError::Generation(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Generation(format!("JSON parse error: {}", e)))
    }
}

/// Prompt for biography generation.
pub fn bio_prompt(request: &BioRequest) -> String {
    format!(
        "Write a professional, engaging 2-paragraph electronic music artist biography for {}.\n\
         Genres: {}.\n\
         Keywords/Details: {}.\n\
         Make it sound sophisticated and ready for a press kit.",
        request.name,
        request.genres.join(", "),
        request.keywords.trim()
    )
}

/// Prompt for parsing an unstructured dump.
pub fn dump_prompt(input: &str) -> String {
    format!(
        "You are an expert talent manager. Parse the following unstructured data dump from \
         an artist and organize it into a structured press kit format.\n\
         Input: {}\n\n\
         Instructions:\n\
         1. Extract the display name and create a short, catchy tagline.\n\
         2. If a bio is provided, clean it up. If not, generate one based on the info.\n\
         3. Identify genres and location.\n\
         4. Map links to their correct social platforms.\n\
         5. Identify achievements/milestones and organize by year.\n\
         6. Identify photo links, video links (YouTube/Vimeo), and music links (Spotify/Soundcloud).\n\
         7. Identify technical rider or logo files (URLs).",
        input.trim()
    )
}

/// Declared response schema for [`GeneratedKit`].
pub fn press_kit_schema() -> Value {
    let string = json!({ "type": "STRING" });
    json!({
        "type": "OBJECT",
        "properties": {
            "displayName": string,
            "tagline": string,
            "bio": string,
            "location": string,
            "genres": { "type": "ARRAY", "items": string },
            "socials": {
                "type": "OBJECT",
                "properties": {
                    "instagram": string,
                    "soundcloud": string,
                    "spotify": string,
                    "twitter": string,
                    "facebook": string,
                    "youtube": string,
                }
            },
            "achievements": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "year": string,
                        "title": string,
                        "description": string,
                    },
                    "required": ["year", "title"]
                }
            },
            "videos": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": { "title": string, "url": string }
                }
            },
            "musicEmbeds": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "platform": { "type": "STRING", "description": "spotify or soundcloud" },
                        "url": string,
                    }
                }
            }
        },
        "required": ["displayName", "bio"]
    })
}

// ─── Response Types ──────────────────────────────────────────────────────────

/// generateContent response (only the fields we read).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

/// Press kit fields extracted from an unstructured dump.
///
/// Every field is optional; absent fields leave the existing kit untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedKit {
    pub display_name: Option<String>,
    pub tagline: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub genres: Option<Vec<String>>,
    pub socials: Option<SocialLinks>,
    pub achievements: Option<Vec<GeneratedAchievement>>,
    pub videos: Option<Vec<GeneratedVideo>>,
    pub music_embeds: Option<Vec<GeneratedEmbed>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedAchievement {
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedVideo {
    pub title: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedEmbed {
    pub platform: Option<String>,
    pub url: Option<String>,
}

impl GeneratedKit {
    /// Overlay the generated fields onto `kit`.
    ///
    /// Present scalar and list fields replace the kit's; social links are
    /// merged per platform. Generated entries get fresh ids. Videos and
    /// embeds without a URL, and embeds on unknown platforms, are dropped.
    pub fn merge_into(self, kit: &mut PressKit) {
        if let Some(display_name) = self.display_name {
            kit.display_name = display_name;
        }
        if let Some(tagline) = self.tagline {
            kit.tagline = tagline;
        }
        if let Some(bio) = self.bio {
            kit.bio = bio;
        }
        if let Some(location) = self.location {
            kit.location = location;
        }
        if let Some(genres) = self.genres {
            kit.genres = genres;
        }
        if let Some(socials) = self.socials {
            kit.socials.merge(socials);
        }
        if let Some(achievements) = self.achievements {
            kit.achievements = achievements
                .into_iter()
                .map(|a| Achievement {
                    id: new_entry_id(),
                    year: a.year,
                    title: a.title,
                    description: a.description.unwrap_or_default(),
                })
                .collect();
        }
        if let Some(videos) = self.videos {
            kit.videos = videos
                .into_iter()
                .filter_map(|v| {
                    Some(VideoEntry {
                        id: new_entry_id(),
                        url: v.url.filter(|u| !u.trim().is_empty())?,
                        title: v.title.unwrap_or_default(),
                    })
                })
                .collect();
        }
        if let Some(embeds) = self.music_embeds {
            kit.music_embeds = embeds
                .into_iter()
                .filter_map(|e| {
                    Some(MusicEmbed {
                        id: new_entry_id(),
                        platform: MusicPlatform::parse(e.platform.as_deref()?)?,
                        url: e.url.filter(|u| !u.trim().is_empty())?,
                    })
                })
                .collect();
        }
    }
}
