// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests across the domain, the ports, and the in-memory adapters.

use feedline::application::port::auth::AuthProvider;
use feedline::application::port::store::FeedStore;
use feedline::config::{self, Config};
use feedline::domain::draft::{AssetArea, Draft};
use feedline::domain::post::Timestamp;
use feedline::domain::user::User;
use feedline::i18n::fluent::I18n;
use feedline::infrastructure::{FixedSession, MemoryStore};
use tempfile::tempdir;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_session_then_post_round_trip() {
    let auth = FixedSession::new(User::new("Ada"));
    let store = MemoryStore::new();

    // Session resolves before anything is written.
    let user = block_on(auth.resolve_session()).expect("session");
    assert_eq!(user.display_name, "Ada");

    // Compose a text-only post the way the dialog would.
    let mut draft = Draft::new();
    draft.set_text("Hello world");
    assert!(draft.can_submit());

    let payload = draft.into_submission(user);
    assert_eq!(payload.timestamp, Timestamp::ServerAssigned);

    block_on(store.submit_post(payload)).expect("submit");

    // The store resolved the sentinel and serves the post newest-first.
    let posts = block_on(store.fetch_posts()).expect("fetch");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].author.name, "Ada");
    assert_eq!(posts[0].description, "Hello world");
    assert!(posts[0].date.resolved().is_some());
}

#[test]
fn test_post_with_video_link_keeps_single_attachment() {
    let store = MemoryStore::new();
    let user = User::new("Grace");

    let mut draft = Draft::new();
    draft.set_text("Watch this");
    draft.switch_asset_area(AssetArea::Image);
    draft
        .attach_image(Some(std::path::PathBuf::from("discarded.png")))
        .expect("attach");
    // Switching panels discards the pending image.
    draft.switch_asset_area(AssetArea::Video);
    draft.set_video_link("https://example.com/clip");

    block_on(store.submit_post(draft.into_submission(user))).expect("submit");

    let posts = block_on(store.fetch_posts()).expect("fetch");
    assert_eq!(posts[0].video.as_deref(), Some("https://example.com/clip"));
    assert!(posts[0].image.is_none());
}

#[test]
fn test_successive_posts_appear_newest_first() {
    let store = MemoryStore::new();
    let user = User::new("Ada");

    for text in ["first", "second", "third"] {
        let mut draft = Draft::new();
        draft.set_text(text);
        block_on(store.submit_post(draft.into_submission(user.clone()))).expect("submit");
    }

    let posts = block_on(store.fetch_posts()).expect("fetch");
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0].description, "third");
    assert_eq!(posts[2].description, "first");
}

#[test]
fn test_prepopulated_store_serves_existing_feed() {
    use feedline::domain::post::{Author, Post, PostId};

    let existing = Post {
        id: PostId::new("seed-0"),
        author: Author::from(User::new("Grace").with_headline("Rear Admiral")),
        date: Timestamp::ServerAssigned,
        description: "Existing post".to_string(),
        image: None,
        video: None,
        likes: 4,
        comments: 1,
    };
    let store = MemoryStore::with_posts(vec![existing]);

    let posts = block_on(store.fetch_posts()).expect("fetch");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].author.description.as_deref(), Some("Rear Admiral"));
    assert_eq!(posts[0].likes, 4);

    // New writes land ahead of the seeded feed.
    let mut draft = Draft::new();
    draft.set_text("Fresh post");
    block_on(store.submit_post(draft.into_submission(User::new("Ada")))).expect("submit");

    let posts = block_on(store.fetch_posts()).expect("fetch");
    assert_eq!(posts[0].description, "Fresh post");
}
