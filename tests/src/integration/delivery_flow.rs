//! # Delivery Flow
//!
//! The learner loop: host starts an attempt and pushes attributes, the
//! surface renders, the learner answers, the host grades with
//! first-match-wins over the model's rules, and the surface presents the
//! returned feedback.

use crate::harness::TestHost;
use activity_bus::HostError;
use activity_model::default_model;
use activity_surfaces::{DeliverySurface, Surface};

#[tokio::test]
async fn test_correct_answer_presents_correct_feedback() {
    let (mut host, plugin) = TestHost::new(default_model());
    let mut surface = DeliverySurface::new(plugin.submissions.clone());

    let attempt = host.start_attempt();
    host.push_delivery_attrs(&mut surface, &attempt, false);
    surface.mount().unwrap();

    surface.student_input("4").unwrap();
    surface
        .submit(&attempt.attempt_guid, &attempt.parts[0].attempt_guid)
        .unwrap();

    let result = host.grade_next_submission().await;
    assert!((result.evaluations[0].score - 1.0).abs() < f64::EPSILON);

    surface.settle().await.expect("pending submission").unwrap();
    assert_eq!(surface.view().unwrap().feedback.as_deref(), Some("Correct"));
}

#[tokio::test]
async fn test_wrong_answer_falls_through_to_catch_all() {
    let (mut host, plugin) = TestHost::new(default_model());
    let mut surface = DeliverySurface::new(plugin.submissions.clone());

    let attempt = host.start_attempt();
    host.push_delivery_attrs(&mut surface, &attempt, false);
    surface.mount().unwrap();

    surface.student_input("7").unwrap();
    surface
        .submit(&attempt.attempt_guid, &attempt.parts[0].attempt_guid)
        .unwrap();

    let result = host.grade_next_submission().await;
    assert!(result.evaluations[0].score.abs() < f64::EPSILON);
    assert!((result.evaluations[0].out_of - 1.0).abs() < f64::EPSILON);

    surface.settle().await.expect("pending submission").unwrap();
    assert_eq!(
        surface.view().unwrap().feedback.as_deref(),
        Some("Incorrect")
    );
}

#[tokio::test]
async fn test_new_attempt_replaces_state_and_clears_feedback() {
    let (mut host, plugin) = TestHost::new(default_model());
    let mut surface = DeliverySurface::new(plugin.submissions.clone());

    let first = host.start_attempt();
    host.push_delivery_attrs(&mut surface, &first, false);
    surface.mount().unwrap();

    surface.student_input("4").unwrap();
    surface
        .submit(&first.attempt_guid, &first.parts[0].attempt_guid)
        .unwrap();
    host.grade_next_submission().await;
    surface.settle().await.expect("pending submission").unwrap();
    assert!(surface.view().unwrap().feedback.is_some());

    // Host invalidates the attempt and pushes a fresh state attribute;
    // the re-render is a pure projection of the new attributes.
    let second = host.start_attempt();
    host.push_delivery_attrs(&mut surface, &second, false);

    let view = surface.view().unwrap();
    assert_eq!(view.input_key, second.attempt_guid);
    assert!(view.feedback.is_none());
    assert!(view.input_value.is_empty());
}

#[tokio::test]
async fn test_host_evaluation_error_shows_notice_only() {
    let (mut host, plugin) = TestHost::new(default_model());
    let mut surface = DeliverySurface::new(plugin.submissions.clone());

    let attempt = host.start_attempt();
    host.push_delivery_attrs(&mut surface, &attempt, false);
    surface.mount().unwrap();

    surface.student_input("4").unwrap();
    surface
        .submit(&attempt.attempt_guid, &attempt.parts[0].attempt_guid)
        .unwrap();
    host.fail_next_submission("grader down").await;

    let outcome = surface.settle().await.expect("pending submission");
    assert!(outcome.is_err());

    let view = surface.view().unwrap();
    assert!(view.feedback.is_none());
    assert!(view.notice.is_some());
}

#[tokio::test]
async fn test_abandoned_submission_resolves_host_unavailable() {
    let (mut host, plugin) = TestHost::new(default_model());
    let mut surface = DeliverySurface::new(plugin.submissions.clone());

    let attempt = host.start_attempt();
    host.push_delivery_attrs(&mut surface, &attempt, false);
    surface.mount().unwrap();

    surface
        .submit(&attempt.attempt_guid, &attempt.parts[0].attempt_guid)
        .unwrap();
    host.abandon_next_submission().await;

    let outcome = surface.settle().await.expect("pending submission");
    assert_eq!(outcome, Err(HostError::HostUnavailable));
}

#[tokio::test]
async fn test_graded_context_is_recorded() {
    let (host, plugin) = TestHost::new(default_model());
    let mut surface = DeliverySurface::new(plugin.submissions.clone());

    let attempt = host.start_attempt();
    host.push_delivery_attrs(&mut surface, &attempt, true);
    surface.mount().unwrap();

    assert_eq!(surface.graded(), Some(true));
}
