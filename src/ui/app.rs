//! Application state: the active screen and its lifecycle.
//!
//! Screens own their viewmodel and its redraw subscription. Activating a
//! route tears the previous screen down (unsubscribing its listener) and
//! builds a fresh one, so no state survives a navigation except what the
//! next screen refetches.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crossterm::event::KeyEvent;
use tokio::sync::mpsc::UnboundedSender;

use crate::api::EmployeeApi;
use crate::router::Router;
use crate::ui::events::{AppEvent, ScreenRequest};
use crate::ui::{form_view, list_view};
use crate::vm::{FormViewModel, ListViewModel, Subscription};

pub struct ListScreen {
    pub vm: Arc<ListViewModel>,
    pub selected: usize,
    /// Set while a spawned delete is outstanding; further deletes are
    /// ignored until it clears.
    pub deleting: Arc<AtomicBool>,
    subscription: Subscription,
}

pub struct FormScreen {
    pub vm: Arc<FormViewModel>,
    /// Index into the form rows: the four fields, then the active toggle.
    pub focused: usize,
    /// Set while a spawned submit is outstanding; Enter is ignored until
    /// it clears, so one save cannot be dispatched twice.
    pub submitting: Arc<AtomicBool>,
    subscription: Subscription,
}

pub enum Screen {
    /// Before the first route resolves.
    Starting,
    List(ListScreen),
    Form(FormScreen),
}

pub struct App {
    api: Arc<EmployeeApi>,
    router: Arc<Router>,
    events: UnboundedSender<AppEvent>,
    screen: Screen,
    should_quit: bool,
}

impl App {
    pub fn new(
        api: Arc<EmployeeApi>,
        router: Arc<Router>,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            api,
            router,
            events,
            screen: Screen::Starting,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn current_path(&self) -> String {
        self.router.current()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Activate(request) => self.activate(request),
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Redraw | AppEvent::Resize => {}
            AppEvent::Quit => self.should_quit = true,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match &mut self.screen {
            Screen::List(screen) => {
                list_view::handle_key(screen, key, &self.router, &mut self.should_quit)
            }
            Screen::Form(screen) => form_view::handle_key(screen, key, &self.router),
            Screen::Starting => {}
        }
    }

    fn activate(&mut self, request: ScreenRequest) {
        self.teardown();
        match request {
            ScreenRequest::List => {
                let vm = Arc::new(ListViewModel::new(Arc::clone(&self.api)));
                let subscription = vm.subscribe(self.redraw_listener());
                let task_vm = Arc::clone(&vm);
                tokio::spawn(async move { task_vm.load().await });
                self.screen = Screen::List(ListScreen {
                    vm,
                    selected: 0,
                    deleting: Arc::new(AtomicBool::new(false)),
                    subscription,
                });
            }
            ScreenRequest::Add => {
                let vm = Arc::new(FormViewModel::new(Arc::clone(&self.api)));
                let subscription = vm.subscribe(self.redraw_listener());
                vm.initialize_for_add();
                self.screen = Screen::Form(FormScreen {
                    vm,
                    focused: 0,
                    submitting: Arc::new(AtomicBool::new(false)),
                    subscription,
                });
            }
            ScreenRequest::Edit { id } => {
                let vm = Arc::new(FormViewModel::new(Arc::clone(&self.api)));
                let subscription = vm.subscribe(self.redraw_listener());
                let task_vm = Arc::clone(&vm);
                tokio::spawn(async move { task_vm.initialize_for_edit(&id).await });
                self.screen = Screen::Form(FormScreen {
                    vm,
                    focused: 0,
                    submitting: Arc::new(AtomicBool::new(false)),
                    subscription,
                });
            }
        }
    }

    fn redraw_listener(&self) -> impl Fn() + Send + Sync + 'static {
        let tx = self.events.clone();
        move || {
            let _ = tx.send(AppEvent::Redraw);
        }
    }

    fn teardown(&mut self) {
        match &self.screen {
            Screen::List(screen) => screen.subscription.unsubscribe(),
            Screen::Form(screen) => screen.subscription.unsubscribe(),
            Screen::Starting => {}
        }
        self.screen = Screen::Starting;
    }
}
