mod common;

use std::time::Duration;

use common::{dead_api, signed_up_client, spawn_api};
use notes_client::api::{UpdateNote, ALL_CATEGORIES};
use notes_client::types::category_color;
use notes_client::workspace::NOTE_SAVE_FALLBACK;
use notes_client::{validate, ApiClient, Dashboard};
use uuid::Uuid;

async fn dashboard(email: &str) -> Dashboard {
    let base_url = spawn_api().await;
    Dashboard::new(signed_up_client(&base_url, email).await)
}

#[tokio::test]
async fn note_creation_is_validated_locally() {
    // no server behind this client; validation must short-circuit
    let dashboard = Dashboard::new(ApiClient::new(dead_api()));

    let err = dashboard.create_note("   ", "body", Some(Uuid::now_v7())).await.unwrap_err();
    assert_eq!(err.user_message(NOTE_SAVE_FALLBACK), validate::NOTE_TITLE_REQUIRED);

    let err = dashboard.create_note("title", "", Some(Uuid::now_v7())).await.unwrap_err();
    assert_eq!(err.user_message(NOTE_SAVE_FALLBACK), validate::NOTE_BODY_REQUIRED);

    let err = dashboard.create_note("title", "body", None).await.unwrap_err();
    assert_eq!(err.user_message(NOTE_SAVE_FALLBACK), validate::NOTE_CATEGORY_REQUIRED);
}

#[tokio::test]
async fn created_notes_show_up_in_the_list() {
    let dashboard = dashboard("test@example.com").await;

    let categories = dashboard.categories().await.unwrap();
    let note = dashboard
        .create_note("  Meeting Notes  ", "Discuss project timeline", Some(categories[0].id))
        .await
        .unwrap();
    assert_eq!(note.title, "Meeting Notes", "title is trimmed before sending");

    let notes = dashboard.notes().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Meeting Notes");
    assert_eq!(category_color(&notes[0], &categories), categories[0].color);
}

#[tokio::test]
async fn mutations_invalidate_category_counts() {
    let dashboard = dashboard("test@example.com").await;

    let categories = dashboard.categories().await.unwrap();
    assert!(categories.iter().all(|c| c.note_count == Some(0)));

    dashboard
        .create_note("first", "1", Some(categories[0].id))
        .await
        .unwrap();

    // the cached list is stale now; the next read refetches
    let categories = dashboard.categories().await.unwrap();
    assert_eq!(categories[0].note_count, Some(1));
}

#[tokio::test]
async fn category_selection_filters_immediately() {
    let dashboard = dashboard("test@example.com").await;

    let categories = dashboard.categories().await.unwrap();
    dashboard.create_note("homework", "due friday", Some(categories[1].id)).await.unwrap();
    dashboard.create_note("groceries", "milk, bread", Some(categories[2].id)).await.unwrap();

    let notes = dashboard.select_category(&categories[1].name).await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "homework");

    let notes = dashboard.select_category(ALL_CATEGORIES).await.unwrap();
    assert_eq!(notes.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn search_round_trip_is_debounced() {
    let dashboard = dashboard("test@example.com").await;

    let categories = dashboard.categories().await.unwrap();
    dashboard
        .create_note("Meeting Notes", "Discuss project timeline", Some(categories[0].id))
        .await
        .unwrap();
    dashboard
        .create_note("Shopping List", "Milk, bread, eggs", Some(categories[0].id))
        .await
        .unwrap();

    // a typing burst: only the settled value triggers a fetch
    dashboard.set_search("m");
    dashboard.set_search("me");
    dashboard.set_search("meet");

    assert!(dashboard.cached_notes().is_none(), "nothing fetched before the delay");

    tokio::time::sleep(Duration::from_millis(600)).await;

    let notes = dashboard.cached_notes().expect("debounced fetch landed in the cache");
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Meeting Notes");

    // matching is case-insensitive over title and body
    dashboard.set_search("BREAD");
    tokio::time::sleep(Duration::from_millis(600)).await;
    let notes = dashboard.cached_notes().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].title, "Shopping List");

    // clearing the search restores the unfiltered list
    dashboard.set_search("");
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(dashboard.cached_notes().unwrap().len(), 2);
}

#[tokio::test]
async fn updates_are_partial_and_refresh_the_list() {
    let dashboard = dashboard("test@example.com").await;

    let categories = dashboard.categories().await.unwrap();
    let note = dashboard.create_note("first", "1", Some(categories[0].id)).await.unwrap();

    let updated = dashboard
        .update_note(
            note.id,
            UpdateNote {
                body: Some("1, revised".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "first");
    assert_eq!(updated.body, "1, revised");

    let notes = dashboard.notes().await.unwrap();
    assert_eq!(notes[0].body, "1, revised");
}

#[tokio::test]
async fn deleted_notes_disappear_from_the_list() {
    let dashboard = dashboard("test@example.com").await;

    let categories = dashboard.categories().await.unwrap();
    let keep = dashboard.create_note("keep", "1", Some(categories[0].id)).await.unwrap();
    let gone = dashboard.create_note("gone", "2", Some(categories[0].id)).await.unwrap();

    dashboard.delete_note(gone.id).await.unwrap();

    let notes = dashboard.notes().await.unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].id, keep.id);
}

#[tokio::test]
async fn save_failures_fall_back_to_a_generic_message() {
    let dashboard = dashboard("test@example.com").await;

    // a category id the server does not know
    let err = dashboard
        .create_note("title", "body", Some(Uuid::now_v7()))
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message(NOTE_SAVE_FALLBACK),
        "You cannot create a note in a category that does not belong to you."
    );

    // network failure: nothing listening
    let dead = Dashboard::new(ApiClient::new(dead_api()));
    let err = dead.create_note("title", "body", Some(Uuid::now_v7())).await.unwrap_err();
    assert_eq!(err.user_message(NOTE_SAVE_FALLBACK), NOTE_SAVE_FALLBACK);
}
