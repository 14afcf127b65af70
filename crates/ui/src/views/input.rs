use std::time::Duration;

use dioxus::prelude::*;

use study_core::model::StudyResourceDraft;

use crate::context::AppContext;
use crate::vm::{Notice, notice_for_submission, question_type_options, rating_options, subject_options};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const NOTICE_TTL: Duration = Duration::from_secs(4);

#[component]
pub fn InputView() -> Element {
    let ctx = use_context::<AppContext>();
    let intake = ctx.resource_intake();

    let mut form = use_signal(StudyResourceDraft::default);
    let mut notice = use_signal(|| None::<Notice>);

    let submit = use_callback(move |()| {
        let draft = form.read().clone();
        let result = intake.submit(draft);
        let next = notice_for_submission(&result);
        if result.is_ok() {
            form.set(StudyResourceDraft::default());
        }
        notice.set(Some(next.clone()));

        spawn(async move {
            tokio::time::sleep(NOTICE_TTL).await;
            if notice.read().as_ref() == Some(&next) {
                notice.set(None);
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<InputTestHandles>() {
                handles.register(submit, form);
            }
        }
    }

    let draft = form.read().clone();

    rsx! {
        div { class: "page input-page",
            header { class: "page-header",
                h1 { "Add Study Resource" }
                p { class: "page-header__lead",
                    "Build your personalized study library by adding exam topics, resources, and materials"
                }
            }

            if let Some(current) = notice.read().clone() {
                div { class: "{current.class()}", role: "status",
                    strong { class: "notice__title", "{current.title}" }
                    p { class: "notice__description", "{current.description}" }
                }
            }

            div { class: "card",
                div { class: "card__header",
                    h2 { class: "card__title", "Resource Details" }
                    p { class: "card__description",
                        "Fill in the information below to add a new study resource to your collection"
                    }
                }
                form {
                    class: "resource-form",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        submit.call(());
                    },
                    div { class: "field",
                        label { r#for: "title", "Title *" }
                        input {
                            id: "title",
                            placeholder: "e.g., Quadratic Equations Practice",
                            value: "{draft.title}",
                            oninput: move |evt| form.write().title = evt.value(),
                        }
                    }
                    div { class: "field-row",
                        div { class: "field",
                            label { r#for: "subject", "Subject *" }
                            select {
                                id: "subject",
                                value: "{draft.subject}",
                                onchange: move |evt| form.write().subject = evt.value(),
                                option { value: "", disabled: true, "Select subject" }
                                for (value, label) in subject_options() {
                                    option { key: "{value}", value: "{value}", "{label}" }
                                }
                            }
                        }
                        div { class: "field",
                            label { r#for: "topic", "Topic *" }
                            input {
                                id: "topic",
                                placeholder: "e.g., Algebra, Chemical Bonds",
                                value: "{draft.topic}",
                                oninput: move |evt| form.write().topic = evt.value(),
                            }
                        }
                    }
                    div { class: "field",
                        label { r#for: "link", "Resource Link" }
                        input {
                            id: "link",
                            r#type: "url",
                            placeholder: "https://example.com/study-material",
                            value: "{draft.link}",
                            oninput: move |evt| form.write().link = evt.value(),
                        }
                    }
                    div { class: "field",
                        label { r#for: "description", "Description" }
                        textarea {
                            id: "description",
                            rows: "4",
                            placeholder: "Brief description of the resource and what it covers...",
                            value: "{draft.description}",
                            oninput: move |evt| form.write().description = evt.value(),
                        }
                    }
                    div { class: "field-row",
                        div { class: "field",
                            label { r#for: "rating", "Rating (1-5)" }
                            select {
                                id: "rating",
                                value: "{draft.rating}",
                                onchange: move |evt| form.write().rating = evt.value(),
                                option { value: "", "Rate resource" }
                                for (value, label) in rating_options() {
                                    option { key: "{value}", value: "{value}", "{label}" }
                                }
                            }
                        }
                        div { class: "field",
                            label { r#for: "question-type", "Question Type" }
                            select {
                                id: "question-type",
                                value: "{draft.question_type}",
                                onchange: move |evt| form.write().question_type = evt.value(),
                                option { value: "", "Select question type" }
                                for (value, label) in question_type_options() {
                                    option { key: "{value}", value: "{value}", "{label}" }
                                }
                            }
                        }
                    }
                    div { class: "form-actions",
                        button { class: "button primary", r#type: "submit", "Add Resource" }
                        button {
                            class: "button outline",
                            r#type: "button",
                            onclick: move |_| form.set(StudyResourceDraft::default()),
                            "Clear Form"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct InputTestHandles {
    submit: Rc<RefCell<Option<Callback<()>>>>,
    form: Rc<RefCell<Option<Signal<StudyResourceDraft>>>>,
}

#[cfg(test)]
impl InputTestHandles {
    pub(crate) fn register(&self, submit: Callback<()>, form: Signal<StudyResourceDraft>) {
        *self.submit.borrow_mut() = Some(submit);
        *self.form.borrow_mut() = Some(form);
    }

    pub(crate) fn submit(&self) -> Callback<()> {
        (*self.submit.borrow()).expect("input submit registered")
    }

    pub(crate) fn form(&self) -> Signal<StudyResourceDraft> {
        (*self.form.borrow()).expect("input form registered")
    }
}
