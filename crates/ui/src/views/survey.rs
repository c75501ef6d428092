use dioxus::prelude::*;

use crate::context::AppContext;
use crate::vm::{ResultRow, SubmissionPhase, SurveyIntent, SurveyVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn SurveyView() -> Element {
    let ctx = use_context::<AppContext>();
    let settings = ctx.settings();
    let answer_key = ctx.answer_key();
    let submissions = ctx.submissions();
    let survey = ctx.survey();

    let vm = use_signal(move || SurveyVm::new(survey));
    let submission = use_signal(|| SubmissionPhase::Idle);
    let notice = use_signal(|| None::<&'static str>);
    // Bumped on every answer and every manual navigation. A scheduled advance
    // only applies if the token it captured is still current.
    let advance_token = use_signal(|| 0_u64);

    let audit_enabled = settings.audit_prior_submissions();
    let _audit_resource = {
        let submissions = submissions.clone();
        use_resource(move || {
            let submissions = submissions.clone();
            async move {
                if !audit_enabled {
                    return 0;
                }
                match submissions.fetch_prior().await {
                    Ok(entries) => entries.len(),
                    Err(err) => {
                        log::warn!("prior submission audit failed: {err}");
                        0
                    }
                }
            }
        })
    };

    let dispatch_intent = {
        let submissions = submissions.clone();
        use_callback(move |intent: SurveyIntent| {
            let mut vm = vm;
            let mut submission = submission;
            let mut notice = notice;
            let mut advance_token = advance_token;

            match intent {
                SurveyIntent::SelectSlide(index) => {
                    advance_token.set(advance_token() + 1);
                    if let Err(err) = vm.write().select_slide(index) {
                        log::warn!("ignoring navigation: {err}");
                    }
                }
                SurveyIntent::Answer(option) => {
                    notice.set(None);
                    let result = vm.write().record_answer(&option);
                    let outcome = match result {
                        Ok(outcome) => outcome,
                        Err(err) => {
                            log::warn!("ignoring answer: {err}");
                            return;
                        }
                    };
                    let token = advance_token() + 1;
                    advance_token.set(token);
                    if let Some(next) = outcome.advance_to {
                        let delay = settings.advance_delay();
                        spawn(async move {
                            tokio::time::sleep(delay).await;
                            if advance_token() != token {
                                return;
                            }
                            if let Err(err) = vm.write().select_slide(next) {
                                log::warn!("ignoring scheduled advance: {err}");
                            }
                        });
                    }
                }
                SurveyIntent::Submit => {
                    if submission.read().is_pending() {
                        return;
                    }
                    if !vm.read().is_complete() {
                        notice.set(Some("Please answer all questions before submitting."));
                        return;
                    }
                    notice.set(None);
                    submission.set(SubmissionPhase::Pending);
                    let submissions = submissions.clone();
                    let session = vm.read().session().clone();
                    spawn(async move {
                        match submissions.submit(&session).await {
                            Ok(receipt) => {
                                submission.set(SubmissionPhase::Succeeded { ack: receipt.ack });
                            }
                            Err(err) => {
                                log::warn!("submission failed: {err}");
                                submission.set(SubmissionPhase::Failed {
                                    message: err.to_string(),
                                });
                            }
                        }
                    });
                }
                SurveyIntent::DismissResult => {
                    submission.set(SubmissionPhase::Idle);
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<SurveyTestHandles>() {
                handles.register(dispatch_intent, vm, submission);
            }
        }
    }

    let vm_guard = vm.read();
    let survey_name = vm_guard.survey_name().to_string();
    let total = vm_guard.total();
    let current = vm_guard.current_slide();
    let question_text = vm_guard.current_question().text().to_string();
    let options = vm_guard.current_question().options().clone();
    let selected = vm_guard.selected_option(current).map(ToString::to_string);
    let progress = vm_guard.progress();
    let progress_label = format!("{} / {} answered", progress.answered, progress.total);
    let is_last = current + 1 == total;
    let phase = submission.read().clone();
    let pending = phase.is_pending();
    let notice_text = notice();
    let rows = match &phase {
        SubmissionPhase::Succeeded { .. } => vm_guard.result_rows(&answer_key),
        _ => Vec::new(),
    };

    rsx! {
        section { class: "survey", id: "survey-root",
            header { class: "survey__header",
                h2 { class: "survey__title", "{survey_name}" }
                span { class: "survey__progress", "{progress_label}" }
            }
            nav { class: "survey-dots", aria_label: "Questions",
                for index in 0..total {
                    SlideDot {
                        key: "{index}",
                        index,
                        active: index == current,
                        on_intent: dispatch_intent,
                    }
                }
            }
            article { class: "survey-slide",
                p { class: "survey-slide__question", "{question_text}" }
                div { class: "survey-slide__options",
                    for option in options {
                        OptionButton {
                            key: "{option}",
                            selected: selected.as_deref() == Some(option.as_str()),
                            option,
                            on_intent: dispatch_intent,
                        }
                    }
                }
            }
            if let Some(text) = notice_text {
                p { class: "survey-notice", role: "alert", "{text}" }
            }
            if let SubmissionPhase::Failed { message } = &phase {
                div { class: "survey-error", role: "alert",
                    p { class: "survey-error__message", "Submission failed: {message}" }
                    button {
                        class: "survey-error__dismiss",
                        r#type: "button",
                        onclick: move |_| dispatch_intent.call(SurveyIntent::DismissResult),
                        "Dismiss"
                    }
                }
            }
            if is_last {
                footer { class: "survey__footer",
                    button {
                        class: "survey-submit",
                        id: "survey-submit",
                        r#type: "button",
                        disabled: pending,
                        onclick: move |_| dispatch_intent.call(SurveyIntent::Submit),
                        if pending { "Submitting..." } else { "Submit" }
                    }
                }
            }
            if let SubmissionPhase::Succeeded { ack } = &phase {
                ResultModal {
                    rows: rows.clone(),
                    ack: ack.clone(),
                    on_intent: dispatch_intent,
                }
            }
        }
    }
}

#[component]
fn SlideDot(index: usize, active: bool, on_intent: EventHandler<SurveyIntent>) -> Element {
    let class = if active {
        "survey-dot survey-dot--active"
    } else {
        "survey-dot"
    };
    let label = index + 1;
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            aria_pressed: "{active}",
            onclick: move |_| on_intent.call(SurveyIntent::SelectSlide(index)),
            "{label}"
        }
    }
}

#[component]
fn OptionButton(option: String, selected: bool, on_intent: EventHandler<SurveyIntent>) -> Element {
    let class = if selected {
        "survey-option survey-option--selected"
    } else {
        "survey-option"
    };
    let label = option.clone();
    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            aria_pressed: "{selected}",
            onclick: move |_| on_intent.call(SurveyIntent::Answer(option.clone())),
            "{label}"
        }
    }
}

#[component]
fn ResultModal(
    rows: Vec<ResultRow>,
    ack: String,
    on_intent: EventHandler<SurveyIntent>,
) -> Element {
    rsx! {
        div {
            class: "survey-modal-overlay",
            onclick: move |_| on_intent.call(SurveyIntent::DismissResult),
            div {
                class: "survey-modal",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),
                h3 { class: "survey-modal__title", "Your responses" }
                ul { class: "survey-results",
                    for (index, row) in rows.iter().enumerate() {
                        li {
                            key: "{index}",
                            class: if row.correct {
                                "survey-result survey-result--positive"
                            } else {
                                "survey-result survey-result--negative"
                            },
                            span { class: "survey-result__question", "{row.question}" }
                            span { class: "survey-result__answer", "{row.selected}" }
                            span { class: "survey-result__mark",
                                if row.correct { "✔" } else { "✘" }
                            }
                        }
                    }
                }
                p { class: "survey-modal__ack", "{ack}" }
                button {
                    class: "survey-modal__close",
                    r#type: "button",
                    onclick: move |_| on_intent.call(SurveyIntent::DismissResult),
                    "Close"
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SurveyTestHandles {
    dispatch: Rc<RefCell<Option<Callback<SurveyIntent>>>>,
    vm: Rc<RefCell<Option<Signal<SurveyVm>>>>,
    submission: Rc<RefCell<Option<Signal<SubmissionPhase>>>>,
}

#[cfg(test)]
impl SurveyTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<SurveyIntent>,
        vm: Signal<SurveyVm>,
        submission: Signal<SubmissionPhase>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
        *self.submission.borrow_mut() = Some(submission);
    }

    pub(crate) fn dispatch(&self) -> Callback<SurveyIntent> {
        (*self.dispatch.borrow()).expect("survey dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<SurveyVm> {
        (*self.vm.borrow()).expect("survey vm registered")
    }

    pub(crate) fn submission(&self) -> Signal<SubmissionPhase> {
        (*self.submission.borrow()).expect("survey submission registered")
    }
}
