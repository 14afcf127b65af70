use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{Clock, ResourceIntakeService, StudyLibrary, StudyTimer};
use study_core::model::StudyResourceDraft;
use study_core::{ManualTimeSource, NavigatorState};
use study_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::input::InputTestHandles;
use crate::views::study::{StudyIntent, StudySession, StudyTestHandles};
use crate::views::{HomeView, InputView, StudyTab};

#[derive(Clone)]
struct TestApp {
    clock: Clock,
    library: Arc<StudyLibrary>,
    resource_intake: Arc<ResourceIntakeService>,
    time_source: ManualTimeSource,
    timer_duration_secs: u32,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn library(&self) -> Arc<StudyLibrary> {
        Arc::clone(&self.library)
    }

    fn resource_intake(&self) -> Arc<ResourceIntakeService> {
        Arc::clone(&self.resource_intake)
    }

    fn timer_duration_secs(&self) -> u32 {
        self.timer_duration_secs
    }

    fn new_timer(&self) -> StudyTimer {
        StudyTimer::new(Arc::new(self.time_source.clone()), self.timer_duration_secs)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Input,
    Study(StudyTab),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    study_handles: Option<StudyTestHandles>,
    input_handles: Option<InputTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.study_handles.clone() {
        use_context_provider(|| handles);
    }
    if let Some(handles) = props.input_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Input => rsx! { InputView {} },
        ViewKind::Study(initial_tab) => rsx! { StudySession { initial_tab } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub time_source: ManualTimeSource,
    pub study_handles: Option<StudyTestHandles>,
    pub input_handles: Option<InputTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn study(&self) -> &StudyTestHandles {
        self.study_handles.as_ref().expect("study view handles")
    }

    pub fn input(&self) -> &InputTestHandles {
        self.input_handles.as_ref().expect("input view handles")
    }

    pub fn dispatch_study(&mut self, intent: StudyIntent) {
        let dispatch = self.study().dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn navigator_state(&self) -> NavigatorState {
        let navigator = self.study().navigator();
        self.dom.in_runtime(|| navigator.read().state())
    }

    pub fn fill_form(&mut self, draft: StudyResourceDraft) {
        let mut form = self.input().form();
        self.dom.in_runtime(|| form.set(draft));
        drive_dom(&mut self.dom);
    }

    pub fn submit_form(&mut self) {
        let submit = self.input().submit();
        self.dom.in_runtime(|| submit.call(()));
        drive_dom(&mut self.dom);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_duration(view, 1500)
}

pub fn setup_view_harness_with_duration(view: ViewKind, timer_duration_secs: u32) -> ViewHarness {
    let clock = Clock::fixed(fixed_now());
    let time_source = ManualTimeSource::new();
    let app = Arc::new(TestApp {
        clock,
        library: Arc::new(StudyLibrary::builtin(clock)),
        resource_intake: Arc::new(ResourceIntakeService::new(clock)),
        time_source: time_source.clone(),
        timer_duration_secs,
    });

    let study_handles = match view {
        ViewKind::Study(_) => Some(StudyTestHandles::default()),
        _ => None,
    };
    let input_handles = match view {
        ViewKind::Input => Some(InputTestHandles::default()),
        _ => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            study_handles: study_handles.clone(),
            input_handles: input_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        time_source,
        study_handles,
        input_handles,
    }
}
