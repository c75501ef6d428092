use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use pulse_core::model::{Response, SurveySettings};
use serde_json::Value;
use store::{InMemoryStore, ResponseStore, StoreError};

use super::test_harness::{
    drive_dom, fast_settings, setup_view_harness, setup_view_harness_with_key,
    setup_view_harness_with_store,
};
use crate::vm::{SubmissionPhase, SurveyIntent};

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(5, fast_settings());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Test Survey"), "missing title in {html}");
    assert!(html.contains("Question 1?"), "missing first question in {html}");
    assert!(html.contains("0 / 5 answered"), "missing progress in {html}");
    assert!(html.contains("survey-dot"), "missing slide dots in {html}");
    assert!(!html.contains("survey-submit"), "submit shown early in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_answer_selects_and_advances() {
    let mut harness = setup_view_harness(5, fast_settings());
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    dispatch.call(SurveyIntent::Answer("Yes".to_string()));
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(html.contains("survey-option--selected"), "missing selection in {html}");
    assert!(html.contains("1 / 5 answered"), "missing progress in {html}");
    assert!(html.contains("Question 1?"), "advanced before the delay in {html}");

    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 2?"), "missing advance in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_last_slide_shows_submit_and_stays() {
    let mut harness = setup_view_harness(3, fast_settings());
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    dispatch.call(SurveyIntent::SelectSlide(2));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Question 3?"), "missing last question in {html}");
    assert!(html.contains("survey-submit"), "missing submit in {html}");

    dispatch.call(SurveyIntent::Answer("No".to_string()));
    drive_dom(&mut harness.dom);
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 3?"), "left the last slide in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_dots_navigate_any_direction() {
    let mut harness = setup_view_harness(5, fast_settings());
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    dispatch.call(SurveyIntent::SelectSlide(4));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Question 5?"), "missing forward jump in {html}");

    dispatch.call(SurveyIntent::SelectSlide(1));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Question 2?"), "missing backward jump in {html}");

    // Out-of-range targets are logged and ignored.
    dispatch.call(SurveyIntent::SelectSlide(9));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(html.contains("Question 2?"), "out-of-range jump applied in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_navigation_cancels_scheduled_advance() {
    let mut harness = setup_view_harness(5, fast_settings());
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    dispatch.call(SurveyIntent::Answer("Yes".to_string()));
    dispatch.call(SurveyIntent::SelectSlide(3));
    drive_dom(&mut harness.dom);

    // Let the stale timer fire; the manual jump must win.
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Question 4?"), "missing manual target in {html}");
    assert!(!html.contains("Question 2?"), "stale advance applied in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_reanswer_overwrites_slot() {
    let mut harness = setup_view_harness(5, fast_settings());
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    dispatch.call(SurveyIntent::Answer("Yes".to_string()));
    dispatch.call(SurveyIntent::Answer("No".to_string()));
    drive_dom(&mut harness.dom);

    let vm = harness.handles.vm();
    assert_eq!(vm.read().selected_option(0), Some("No"));
    assert_eq!(vm.read().progress().answered, 1);

    // The rewrite rescheduled the advance; it still fires exactly once.
    harness.drive_async().await;
    harness.drive_async().await;
    assert_eq!(vm.read().current_slide(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_incomplete_submit_blocks_without_network() {
    let mut harness = setup_view_harness(3, fast_settings());
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    dispatch.call(SurveyIntent::Answer("Yes".to_string()));
    dispatch.call(SurveyIntent::SelectSlide(2));
    dispatch.call(SurveyIntent::Submit);
    drive_dom(&mut harness.dom);

    let html = harness.render();
    assert!(
        html.contains("Please answer all questions before submitting."),
        "missing notice in {html}"
    );
    assert_eq!(harness.store.append_count(), 0);
    let submission = harness.handles.submission();
    assert_eq!(*submission.read(), SubmissionPhase::Idle);

    // The next answer clears the notice.
    dispatch.call(SurveyIntent::Answer("No".to_string()));
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(
        !html.contains("Please answer all questions"),
        "stale notice in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_submit_renders_graded_modal() {
    let mut harness = setup_view_harness_with_key(3, fast_settings(), vec!["Yes", "No", "Yes"]);
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    dispatch.call(SurveyIntent::Answer("Yes".to_string()));
    dispatch.call(SurveyIntent::SelectSlide(1));
    dispatch.call(SurveyIntent::Answer("Yes".to_string()));
    dispatch.call(SurveyIntent::SelectSlide(2));
    dispatch.call(SurveyIntent::Answer("Yes".to_string()));
    dispatch.call(SurveyIntent::Submit);
    drive_dom(&mut harness.dom);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Your responses"), "missing modal in {html}");
    assert!(
        html.contains("survey-result--positive"),
        "missing positive mark in {html}"
    );
    assert!(
        html.contains("survey-result--negative"),
        "missing negative mark in {html}"
    );
    assert!(html.contains("stored"), "missing ack in {html}");
    let submission = harness.handles.submission();
    assert_eq!(
        *submission.read(),
        SubmissionPhase::Succeeded {
            ack: r#"{"stored":1}"#.to_string()
        }
    );
    assert_eq!(harness.store.append_count(), 1);

    dispatch.call(SurveyIntent::DismissResult);
    drive_dom(&mut harness.dom);
    let html = harness.render();
    assert!(!html.contains("Your responses"), "modal still shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_submit_is_single_flight() {
    let mut harness = setup_view_harness(2, fast_settings());
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    dispatch.call(SurveyIntent::Answer("Yes".to_string()));
    dispatch.call(SurveyIntent::SelectSlide(1));
    dispatch.call(SurveyIntent::Answer("Yes".to_string()));

    // The second trigger lands while the first attempt is still pending.
    dispatch.call(SurveyIntent::Submit);
    dispatch.call(SurveyIntent::Submit);
    drive_dom(&mut harness.dom);
    harness.drive_async().await;

    assert_eq!(harness.store.append_count(), 1);
}

struct FlakyStore {
    inner: InMemoryStore,
    fail_next: AtomicBool,
}

#[async_trait::async_trait]
impl ResponseStore for FlakyStore {
    async fn append_responses(&self, responses: &[Response]) -> Result<String, StoreError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Connection("store unreachable".to_string()));
        }
        self.inner.append_responses(responses).await
    }

    async fn list_submissions(&self) -> Result<Vec<Value>, StoreError> {
        self.inner.list_submissions().await
    }
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_failed_submit_allows_retry() {
    let store = InMemoryStore::default();
    let response_store: Arc<dyn ResponseStore> = Arc::new(FlakyStore {
        inner: store.clone(),
        fail_next: AtomicBool::new(true),
    });
    let mut harness =
        setup_view_harness_with_store(2, fast_settings(), vec!["Yes", "Yes"], store, response_store);
    harness.rebuild();

    let dispatch = harness.handles.dispatch();
    dispatch.call(SurveyIntent::Answer("Yes".to_string()));
    dispatch.call(SurveyIntent::SelectSlide(1));
    dispatch.call(SurveyIntent::Answer("No".to_string()));
    dispatch.call(SurveyIntent::Submit);
    drive_dom(&mut harness.dom);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Submission failed"), "missing failure banner in {html}");
    assert!(html.contains("store unreachable"), "missing store error in {html}");
    assert!(!html.contains("Your responses"), "modal shown on failure in {html}");
    assert_eq!(harness.store.append_count(), 0);

    // Responses survive the failure; a second attempt goes through as-is.
    dispatch.call(SurveyIntent::Submit);
    drive_dom(&mut harness.dom);
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Your responses"), "missing modal after retry in {html}");
    assert_eq!(harness.store.append_count(), 1);
}

struct FailingStore;

#[async_trait::async_trait]
impl ResponseStore for FailingStore {
    async fn append_responses(&self, _responses: &[Response]) -> Result<String, StoreError> {
        Err(StoreError::Connection("fail".to_string()))
    }

    async fn list_submissions(&self) -> Result<Vec<Value>, StoreError> {
        Err(StoreError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_audit_fetch_runs_once_on_mount() {
    let settings = SurveySettings::new(1, true).expect("settings");
    let mut harness = setup_view_harness(2, settings);
    harness.rebuild();
    harness.drive_async().await;

    assert_eq!(harness.store.list_calls(), 1);
    assert_eq!(harness.store.append_count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_audit_fetch_disabled_by_settings() {
    let mut harness = setup_view_harness(2, fast_settings());
    harness.rebuild();
    harness.drive_async().await;

    assert_eq!(harness.store.list_calls(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn survey_view_smoke_audit_failure_is_not_fatal() {
    let settings = SurveySettings::new(1, true).expect("settings");
    let response_store: Arc<dyn ResponseStore> = Arc::new(FailingStore);
    let mut harness = setup_view_harness_with_store(
        2,
        settings,
        vec!["Yes", "Yes"],
        InMemoryStore::default(),
        response_store,
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 1?"), "survey not rendered in {html}");
    assert!(!html.contains("alert"), "unexpected alert in {html}");
}
