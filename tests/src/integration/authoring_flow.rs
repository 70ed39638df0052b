//! # Authoring Flow
//!
//! The full author edit loop: host pushes a model attribute, the surface
//! renders editable fields, edits are saved as a full model replacement,
//! and the host's acknowledgement (or undo push) flows back down.

use crate::harness::TestHost;
use activity_model::{build_model, default_model, ATTR_MODEL};
use activity_surfaces::{AuthoringSurface, Surface};

#[tokio::test]
async fn test_edit_and_save_round_trip() {
    let (mut host, plugin) = TestHost::new(default_model());
    let mut surface = AuthoringSurface::new(plugin.model_updates.clone());

    surface
        .attribute_changed(ATTR_MODEL, &host.model_attr())
        .unwrap();
    surface.mount().unwrap();
    assert_eq!(surface.view().unwrap().stem_field, "What is two plus two?");
    assert_eq!(surface.view().unwrap().correct_field, "4");

    // Author edits and saves.
    surface.edit_stem("What is three plus three?").unwrap();
    surface.edit_correct("6").unwrap();
    surface.submit().unwrap();

    // Host persists the full replacement and acknowledges.
    let saved = host.accept_next_save().await;
    assert_eq!(saved, build_model("What is three plus three?", "6"));

    let outcome = surface.settle().await.expect("pending save");
    assert_eq!(outcome.unwrap().revision, 1);
}

#[tokio::test]
async fn test_undo_push_rerenders_previous_editing_state() {
    let (mut host, plugin) = TestHost::new(default_model());
    let mut surface = AuthoringSurface::new(plugin.model_updates.clone());

    surface
        .attribute_changed(ATTR_MODEL, &host.model_attr())
        .unwrap();
    surface.mount().unwrap();

    surface.edit_stem("Edited question").unwrap();
    surface.submit().unwrap();
    host.accept_next_save().await;
    surface.settle().await;

    // The host's undo facility pushes the earlier model back down; the
    // surface re-renders from the fresh attribute, not its edit buffer.
    let previous = serde_json::to_string(&default_model()).unwrap();
    surface.attribute_changed(ATTR_MODEL, &previous).unwrap();

    assert_eq!(surface.view().unwrap().stem_field, "What is two plus two?");
}

#[tokio::test]
async fn test_rejected_save_is_logged_not_fatal() {
    let (mut host, plugin) = TestHost::new(default_model());
    let mut surface = AuthoringSurface::new(plugin.model_updates.clone());

    surface
        .attribute_changed(ATTR_MODEL, &host.model_attr())
        .unwrap();
    surface.mount().unwrap();
    surface.edit_correct("5").unwrap();
    surface.submit().unwrap();

    host.reject_next_save("edit conflict").await;

    let outcome = surface.settle().await.expect("pending save");
    assert!(outcome.is_err());

    // The surface stays mounted and editable after the failure.
    surface.edit_correct("6").unwrap();
    surface.submit().unwrap();
    let saved = host.accept_next_save().await;
    assert_eq!(saved.authoring.parts[0].responses[0].rule.answer(), "6");
}
