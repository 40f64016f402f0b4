// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Press kit model: the artist profile that is edited and displayed.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A biography must be strictly longer than this (in characters) for the
/// profile to be listed publicly.
pub const PUBLIC_BIO_MIN_CHARS: usize = 50;

/// Generate a fresh id for a list entry (photo, release, video, ...).
pub fn new_entry_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Derive the default username from an email address.
///
/// Takes the lowercased local part and strips everything that is not an
/// ASCII letter or digit.
pub fn username_from_email(email: &str) -> String {
    let lower = email.trim().to_lowercase();
    let local = lower.split('@').next().unwrap_or_default();
    local.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

fn validate_username(username: &str) -> Result<(), ValidationError> {
    let valid = !username.is_empty()
        && username
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    if !valid {
        return Err(ValidationError::new("username"));
    }
    Ok(())
}

/// The structured artist record ("press kit").
///
/// `validate()` checks only what the editor enforces on save: the username
/// shape and the contact email format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub struct PressKit {
    /// URL-safe handle, lowercase alphanumeric
    #[validate(custom(function = "validate_username"))]
    pub username: String,
    pub display_name: String,
    pub tagline: String,
    /// Free-text biography
    pub bio: String,
    pub location: String,
    /// Genre tags, in display order
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub socials: SocialLinks,
    /// Press shots; the first one doubles as the avatar
    #[serde(default)]
    pub photos: Vec<PressPhoto>,
    /// Logo URLs
    #[serde(default)]
    pub logos: Vec<String>,
    #[serde(default)]
    pub releases: Vec<Release>,
    #[serde(default)]
    pub videos: Vec<VideoEntry>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    pub music_embeds: Vec<MusicEmbed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technical_rider_url: Option<String>,
    /// Display copy of the contact address (not tied to the account email)
    #[validate(email)]
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_agent: Option<String>,
}

impl PressKit {
    /// Demo press kit that new profiles are derived from.
    pub fn template() -> Self {
        Self {
            username: "honjo".to_string(),
            display_name: "HONJO".to_string(),
            tagline: "Deep melodic sounds from the underground of Tokyo.".to_string(),
            bio: "HONJO is a Tokyo-based DJ and producer who has been carving a unique niche \
                  in the melodic techno scene. With over a decade of experience behind the \
                  decks, his sets are known for their emotional depth and driving rhythms. \
                  Having performed at major festivals across Asia and Europe, HONJO continues \
                  to push boundaries with his original productions on labels like Afterlife \
                  and Anjunadeep."
                .to_string(),
            location: "Tokyo, Japan".to_string(),
            genres: vec!["Melodic Techno".to_string(), "Progressive House".to_string()],
            socials: SocialLinks {
                instagram: Some("https://instagram.com/honjomusic".to_string()),
                soundcloud: Some("https://soundcloud.com/honjomusic".to_string()),
                spotify: Some("https://spotify.com/artist/honjo".to_string()),
                facebook: Some("https://facebook.com/honjomusic".to_string()),
                twitter: None,
                youtube: None,
            },
            photos: vec![
                PressPhoto::cover("1", "https://picsum.photos/seed/press1/800/1000"),
                PressPhoto::new("2", "https://picsum.photos/seed/press2/800/600"),
                PressPhoto::new("3", "https://picsum.photos/seed/press3/1000/800"),
            ],
            logos: vec![
                "https://picsum.photos/seed/logo1/400/200".to_string(),
                "https://picsum.photos/seed/logo2/400/200".to_string(),
            ],
            releases: vec![
                Release {
                    id: "r1".to_string(),
                    title: "Neon Nights EP".to_string(),
                    label: "Afterlife".to_string(),
                    year: "2023".to_string(),
                    cover_url: "https://picsum.photos/seed/rel1/400/400".to_string(),
                    link: "#".to_string(),
                },
                Release {
                    id: "r2".to_string(),
                    title: "Lost in Shibuya".to_string(),
                    label: "Anjunadeep".to_string(),
                    year: "2022".to_string(),
                    cover_url: "https://picsum.photos/seed/rel2/400/400".to_string(),
                    link: "#".to_string(),
                },
            ],
            videos: vec![VideoEntry {
                id: "v1".to_string(),
                title: "Live at Ultra Japan 2023".to_string(),
                url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            }],
            achievements: vec![
                Achievement {
                    id: "a1".to_string(),
                    year: "2023".to_string(),
                    title: "Top 100 DJs (Melodic)".to_string(),
                    description: "Ranked #14 in the yearly melodic techno charts.".to_string(),
                },
                Achievement {
                    id: "a2".to_string(),
                    year: "2022".to_string(),
                    title: "Afterlife Residency".to_string(),
                    description: "Selected as monthly resident for Afterlife Tokyo.".to_string(),
                },
            ],
            music_embeds: vec![
                MusicEmbed {
                    id: "m1".to_string(),
                    platform: MusicPlatform::Spotify,
                    url: "https://open.spotify.com/embed/track/4uLU6YJuEkOuzvU6bpS2pL".to_string(),
                },
                MusicEmbed {
                    id: "m2".to_string(),
                    platform: MusicPlatform::Soundcloud,
                    url: "https://w.soundcloud.com/player/?url=https%3A//api.soundcloud.com/tracks/123456789"
                        .to_string(),
                },
            ],
            technical_rider_url: Some("#".to_string()),
            contact_email: "bookings@honjomusic.com".to_string(),
            booking_agent: Some("United Talent Agency".to_string()),
        }
    }

    /// Blank profile for a freshly provisioned account.
    ///
    /// Inherits the template's presentation fields but clears everything
    /// that identifies the demo artist's content.
    pub fn blank_for(username: &str, contact_email: &str) -> Self {
        Self {
            username: username.to_string(),
            display_name: username.to_uppercase(),
            contact_email: contact_email.to_string(),
            bio: String::new(),
            achievements: Vec::new(),
            music_embeds: Vec::new(),
            videos: Vec::new(),
            photos: Vec::new(),
            ..Self::template()
        }
    }

    /// URL of the first photo, used as avatar.
    pub fn avatar_url(&self) -> Option<&str> {
        self.photos.first().map(|p| p.url.as_str())
    }

    /// Whether the biography is long enough to count as filled in.
    pub fn has_complete_bio(&self) -> bool {
        self.bio.chars().count() > PUBLIC_BIO_MIN_CHARS
    }

    /// Eligible for the public directory: complete bio and at least one photo.
    pub fn is_public(&self) -> bool {
        self.has_complete_bio() && !self.photos.is_empty()
    }

    /// Validate the fields that differ from `before`.
    ///
    /// Login accepts any string, so a provisioned kit can start out with an
    /// empty username or a contact email that is not an address. Those stay
    /// accepted until the owner edits them.
    pub fn validate_changes(&self, before: &PressKit) -> Result<(), ValidationErrors> {
        let Err(mut errors) = self.validate() else {
            return Ok(());
        };

        errors.errors_mut().retain(|field, _| match field.as_ref() {
            "username" => self.username != before.username,
            "contact_email" => self.contact_email != before.contact_email,
            _ => true,
        });

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Social profile links; every platform is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soundcloud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

impl SocialLinks {
    /// Overlay the links present in `other`, keeping ours where it has none.
    pub fn merge(&mut self, other: SocialLinks) {
        let SocialLinks {
            instagram,
            soundcloud,
            spotify,
            facebook,
            twitter,
            youtube,
        } = other;
        self.instagram = instagram.or(self.instagram.take());
        self.soundcloud = soundcloud.or(self.soundcloud.take());
        self.spotify = spotify.or(self.spotify.take());
        self.facebook = facebook.or(self.facebook.take());
        self.twitter = twitter.or(self.twitter.take());
        self.youtube = youtube.or(self.youtube.take());
    }
}

/// A press photo. `url` is either a remote URL or an inline `data:` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub struct PressPhoto {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_cover: Option<bool>,
}

impl PressPhoto {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            is_cover: None,
        }
    }

    pub fn cover(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            is_cover: Some(true),
            ..Self::new(id, url)
        }
    }

    /// Build a photo from uploaded image bytes, embedded as a base64 data URL.
    pub fn from_image_bytes(mime: &str, bytes: &[u8]) -> Self {
        let url = format!("data:{};base64,{}", mime, BASE64.encode(bytes));
        Self::new(new_entry_id(), url)
    }

    /// Whether the photo is stored inline rather than linked.
    pub fn is_inline(&self) -> bool {
        self.url.starts_with("data:")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub struct Release {
    pub id: String,
    pub title: String,
    pub label: String,
    pub year: String,
    pub cover_url: String,
    /// External link (store, stream)
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub struct VideoEntry {
    pub id: String,
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub struct Achievement {
    pub id: String,
    pub year: String,
    pub title: String,
    pub description: String,
}

/// Streaming platforms that can be embedded on the public page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub enum MusicPlatform {
    Spotify,
    Soundcloud,
}

impl MusicPlatform {
    /// Parse a platform tag, case-insensitively. Unknown platforms yield None.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "spotify" => Some(Self::Spotify),
            "soundcloud" => Some(Self::Soundcloud),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(feature = "binding-generation", ts(export))]
pub struct MusicEmbed {
    pub id: String,
    pub platform: MusicPlatform,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_from_email() {
        assert_eq!(username_from_email("new.dj@example.com"), "newdj");
        assert_eq!(username_from_email("DJ_Flux-99@mail.org"), "djflux99");
        assert_eq!(username_from_email("noatsign"), "noatsign");
    }

    #[test]
    fn test_blank_for_clears_content() {
        let kit = PressKit::blank_for("newdj", "new.dj@example.com");

        assert_eq!(kit.username, "newdj");
        assert_eq!(kit.display_name, "NEWDJ");
        assert_eq!(kit.contact_email, "new.dj@example.com");
        assert!(kit.bio.is_empty());
        assert!(kit.photos.is_empty());
        assert!(kit.achievements.is_empty());
        assert!(kit.music_embeds.is_empty());
        assert!(kit.videos.is_empty());
    }

    #[test]
    fn test_blank_for_inherits_template_presentation() {
        let template = PressKit::template();
        let kit = PressKit::blank_for("newdj", "new.dj@example.com");

        assert_eq!(kit.logos.len(), 2);
        assert_eq!(kit.releases.len(), 2);
        assert_eq!(kit.logos, template.logos);
        assert_eq!(kit.releases, template.releases);
        assert_eq!(kit.tagline, template.tagline);
        assert_eq!(kit.location, "Tokyo, Japan");
        assert_eq!(kit.genres, vec!["Melodic Techno", "Progressive House"]);
        assert_eq!(kit.socials, template.socials);
        assert_eq!(kit.technical_rider_url.as_deref(), Some("#"));
        assert_eq!(kit.booking_agent.as_deref(), Some("United Talent Agency"));
    }

    #[test]
    fn test_template_is_complete_demo_kit() {
        let template = PressKit::template();

        assert_eq!(template.photos.len(), 3);
        assert_eq!(template.achievements.len(), 2);
        assert_eq!(template.music_embeds.len(), 2);
        assert_eq!(template.music_embeds[1].platform, MusicPlatform::Soundcloud);
        assert_eq!(template.videos.len(), 1);
        assert!(template.bio.ends_with("Afterlife and Anjunadeep."));
        assert!(template.is_public());
    }

    #[test]
    fn test_public_requires_bio_and_photo() {
        let mut kit = PressKit::blank_for("a", "a@b.c");
        kit.bio = "x".repeat(PUBLIC_BIO_MIN_CHARS);
        kit.photos.push(PressPhoto::new("1", "https://img"));
        assert!(!kit.is_public(), "exactly 50 chars is not enough");

        kit.bio.push('x');
        assert!(kit.is_public());

        kit.photos.clear();
        assert!(!kit.is_public());
    }

    #[test]
    fn test_bio_length_counts_characters() {
        let mut kit = PressKit::blank_for("a", "a@b.c");
        // 26 two-byte characters: 52 bytes but only 26 chars
        kit.bio = "é".repeat(26);
        assert!(!kit.has_complete_bio());
    }

    #[test]
    fn test_avatar_is_first_photo() {
        let mut kit = PressKit::blank_for("a", "a@b.c");
        assert_eq!(kit.avatar_url(), None);
        kit.photos = vec![
            PressPhoto::new("1", "https://one"),
            PressPhoto::cover("2", "https://two"),
        ];
        assert_eq!(kit.avatar_url(), Some("https://one"));
    }

    #[test]
    fn test_photo_from_image_bytes() {
        let photo = PressPhoto::from_image_bytes("image/png", b"abc");
        assert_eq!(photo.url, "data:image/png;base64,YWJj");
        assert!(photo.is_inline());
        assert!(!photo.id.is_empty());
    }

    #[test]
    fn test_music_platform_parse() {
        assert_eq!(MusicPlatform::parse("Spotify"), Some(MusicPlatform::Spotify));
        assert_eq!(
            MusicPlatform::parse(" soundcloud "),
            Some(MusicPlatform::Soundcloud)
        );
        assert_eq!(MusicPlatform::parse("bandcamp"), None);
    }

    #[test]
    fn test_camel_case_layout() {
        let kit = PressKit::blank_for("newdj", "new.dj@example.com");
        let json = serde_json::to_value(&kit).unwrap();
        assert_eq!(json["displayName"], "NEWDJ");
        assert_eq!(json["contactEmail"], "new.dj@example.com");
        assert!(json["musicEmbeds"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_validate_username_and_email() {
        let mut kit = PressKit::blank_for("newdj", "new.dj@example.com");
        assert!(kit.validate().is_ok());

        kit.username = "New DJ".to_string();
        assert!(kit.validate().is_err());

        kit.username = "newdj".to_string();
        kit.contact_email = "not-an-email".to_string();
        assert!(kit.validate().is_err());
    }

    #[test]
    fn test_validate_changes_skips_untouched_fields() {
        let provisioned = PressKit::blank_for("", "djvortex");
        assert!(provisioned.validate().is_err());

        let mut kit = provisioned.clone();
        kit.bio = "New bio".to_string();
        assert!(kit.validate_changes(&provisioned).is_ok());

        kit.contact_email = "still-not-an-email".to_string();
        let errors = kit.validate_changes(&provisioned).unwrap_err();
        assert!(errors.errors().contains_key("contact_email"));
        assert!(!errors.errors().contains_key("username"));

        kit.contact_email = "bookings@vortex.io".to_string();
        kit.username = "Bad Name".to_string();
        let errors = kit.validate_changes(&provisioned).unwrap_err();
        assert!(errors.errors().contains_key("username"));
    }

    #[test]
    fn test_social_links_merge() {
        let mut links = SocialLinks {
            instagram: Some("https://instagram.com/old".to_string()),
            spotify: Some("https://spotify.com/old".to_string()),
            ..Default::default()
        };
        links.merge(SocialLinks {
            instagram: Some("https://instagram.com/new".to_string()),
            ..Default::default()
        });
        assert_eq!(links.instagram.as_deref(), Some("https://instagram.com/new"));
        assert_eq!(links.spotify.as_deref(), Some("https://spotify.com/old"));
    }
}
