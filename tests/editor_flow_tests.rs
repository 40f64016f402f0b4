// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! End-to-end editing flows: magic setup and admin edits.

use djpress::config::Config;
use djpress::error::AppError;
use djpress::models::PressPhoto;
use djpress::services::{AdminService, DumpRequest, Editor, GeminiClient};
use serde_json::json;

mod common;
use common::{serve_once, test_store, TEST_ADMIN};

#[tokio::test]
async fn test_magic_setup_publishes_profile() {
    let store = test_store();
    let owner = store.login("vortex@berlin.example").unwrap();
    assert!(owner.press_kit.bio.is_empty());

    let structured = json!({
        "displayName": "VORTEX",
        "bio": "VORTEX is a Berlin producer known for relentless, hypnotic warehouse techno.",
        "location": "Berlin, Germany",
        "musicEmbeds": [{ "platform": "soundcloud", "url": "https://w.soundcloud.com/player/1" }]
    });
    let response = json!({
        "candidates": [{ "content": { "parts": [{ "text": structured.to_string() }] } }]
    });
    let (base_url, _request) = serve_once(200, response.to_string()).await;
    let client = GeminiClient::from_config(&Config {
        gemini_api_key: Some("test-key".to_string()),
        gemini_base_url: base_url,
        ..Config::default()
    });

    let generated = client
        .parse_dump(&DumpRequest {
            input: "My DJ name is VORTEX, based in Berlin".to_string(),
        })
        .await
        .unwrap();

    let mut editor = Editor::open(&store, &owner, &owner.email).unwrap();
    editor.apply_generated(generated);
    assert!(store.list_public_profiles().unwrap().is_empty());

    editor.add_photo(PressPhoto::from_image_bytes("image/jpeg", &[0xff, 0xd8, 0xff]));
    editor.save().unwrap();

    let public = store.list_public_profiles().unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].display_name, "VORTEX");
    assert_eq!(public[0].location, "Berlin, Germany");
    assert_eq!(public[0].username, "vortex");
    assert_eq!(public[0].music_embeds.len(), 1);

    let remembered = store.remembered_accounts().unwrap();
    assert_eq!(remembered[0].name, "VORTEX");
    assert!(remembered[0]
        .avatar
        .as_deref()
        .is_some_and(|url| url.starts_with("data:image/jpeg;base64,")));
}

#[test]
fn test_admin_edits_without_touching_session() {
    let store = test_store();
    store.login("luna@x.io").unwrap();
    let admin = store.login(TEST_ADMIN).unwrap();

    let admin_service = AdminService::new(&store, &admin).unwrap();
    let mut editor = admin_service.open_editor("luna@x.io").unwrap();
    editor.kit_mut().tagline = "House and deep tech".to_string();
    editor.save().unwrap();

    assert_eq!(
        store.get_by_email("luna@x.io").unwrap().unwrap().press_kit.tagline,
        "House and deep tech"
    );
    assert_eq!(store.current_session().unwrap().unwrap().email, TEST_ADMIN);
}

#[test]
fn test_open_editor_on_missing_account() {
    let store = test_store();
    let admin = store.login(TEST_ADMIN).unwrap();

    let err = Editor::open(&store, &admin, "ghost@x.io").err().unwrap();
    assert!(matches!(err, AppError::NotFound(_)));
}
