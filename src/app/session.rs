//! The session orchestrator.
//!
//! Phases run in order: initialize, create views, start, process, finish,
//! terminate views. Finish runs even when an earlier phase failed so the
//! document is saved and closed on a best-effort basis.

use super::errors::{ErrorProcessor, ErrorVerdict};
use super::timers::PeriodicTimer;
use crate::core::codes;
use crate::core::error::{EditorError, ErrorReporter};
use crate::core::event::KeyEvent;
use crate::core::mode::Mode;
use crate::kernel::controller::{Controller, DispatchOutcome};
use crate::kernel::document::DocumentModel;
use crate::kernel::notify::{SharedView, SubscriberId};
use crate::services::config::EditorConfig;
use crate::services::help::{CmdLineHelp, HelpLauncher};
use crate::services::keybinding::KeybindingService;
use crate::tui::console::{ConsoleSettings, CursorShape, SharedConsole};
use crate::views::{standard_views, Palette, ScreenLayout};
use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Created,
    Initialized,
    ViewsCreated,
    Running,
    Finished,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
    Fatal(EditorError),
}

pub struct Session {
    config: EditorConfig,
    console: SharedConsole,
    model: DocumentModel,
    keys: KeybindingService,
    help: Box<dyn HelpLauncher>,
    controller: Option<Controller>,
    views: Vec<(SubscriberId, SharedView)>,
    retired: Vec<SharedView>,
    layout: Option<ScreenLayout>,
    console_settings: ConsoleSettings,
    window: (u16, u16),
    autosave: PeriodicTimer,
    status: PeriodicTimer,
    last_key: Instant,
    errors: ErrorProcessor,
    residual: Vec<EditorError>,
    phase: SessionPhase,
}

impl Session {
    pub fn new(config: EditorConfig, console: SharedConsole, model: DocumentModel) -> Self {
        Self {
            config,
            console,
            model,
            keys: KeybindingService::with_defaults(),
            help: Box::new(CmdLineHelp),
            controller: None,
            views: Vec::new(),
            retired: Vec::new(),
            layout: None,
            console_settings: ConsoleSettings::default(),
            window: (0, 0),
            autosave: PeriodicTimer::disabled(),
            status: PeriodicTimer::disabled(),
            last_key: Instant::now(),
            errors: ErrorProcessor::new(),
            residual: Vec::new(),
            phase: SessionPhase::Created,
        }
    }

    pub fn with_keybindings(mut self, keys: KeybindingService) -> Self {
        self.keys = keys;
        self
    }

    pub fn with_help(mut self, help: Box<dyn HelpLauncher>) -> Self {
        self.help = help;
        self
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn model(&self) -> &DocumentModel {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut DocumentModel {
        &mut self.model
    }

    pub fn controller(&self) -> Option<&Controller> {
        self.controller.as_ref()
    }

    pub fn layout(&self) -> Option<&ScreenLayout> {
        self.layout.as_ref()
    }

    /// Views this session subscribed, in subscription order.
    pub fn views(&self) -> impl Iterator<Item = &SharedView> + '_ {
        self.views.iter().map(|(_, view)| view)
    }

    /// View errors still latched when the views were terminated.
    pub fn residual_errors(&self) -> &[EditorError] {
        &self.residual
    }

    /// Runs every phase to completion with the wall clock.
    pub fn run(&mut self) -> Result<(), EditorError> {
        let started = self
            .initialize(Instant::now())
            .and_then(|()| self.create_views())
            .and_then(|()| self.start(Instant::now()));
        let processed = started.and_then(|()| self.process());
        let finished = self.finish(Instant::now());
        let terminated = self.terminate_views();
        let closed = self.console.borrow_mut().close().map_err(console_failure);
        processed.and(finished).and(terminated).and(closed)
    }

    /// Computes the layout, checks the window can hold it, and applies the
    /// console settings.
    pub fn initialize(&mut self, now: Instant) -> Result<(), EditorError> {
        let layout = ScreenLayout::compute(&self.config)?;
        let window = self.console.borrow().window_size().map_err(console_failure)?;
        if !layout.fits(window.0, window.1) {
            return Err(EditorError::param(
                codes::WINDOW_TOO_SMALL,
                format!(
                    "window is {}x{}, the editor needs {}x{}",
                    window.0, window.1, layout.width, layout.height
                ),
            ));
        }
        let palette = Palette::for_scheme(self.config.colour_scheme);
        let title = self
            .model
            .path()
            .file_name()
            .map(|n| format!("quire - {}", n.to_string_lossy()))
            .unwrap_or_else(|| "quire".to_string());
        self.console_settings = ConsoleSettings {
            width: layout.width,
            height: layout.height,
            title,
            foreground: palette.text.0,
            background: palette.text.1,
        };
        self.console
            .borrow_mut()
            .apply_settings(&self.console_settings)
            .map_err(console_failure)?;
        self.window = window;
        self.layout = Some(layout);
        self.last_key = now;
        self.phase = SessionPhase::Initialized;
        tracing::info!(
            width = layout.width,
            height = layout.height,
            "session initialized"
        );
        Ok(())
    }

    /// Sets up and subscribes the standard views.
    pub fn create_views(&mut self) -> Result<(), EditorError> {
        let views = standard_views(&self.console);
        self.create_views_with(views)
    }

    /// Sets up and subscribes `views` in order. Chrome views must come
    /// before the cursor-owning edit views.
    pub fn create_views_with(&mut self, views: Vec<SharedView>) -> Result<(), EditorError> {
        let Some(layout) = self.layout else {
            return Err(EditorError::program(
                codes::VIEW_NOT_SET_UP,
                "views created before the session was initialized",
            ));
        };
        for view in views {
            if self.is_subscribed(&view) {
                tracing::debug!(view = view.borrow().name(), "view already subscribed");
                continue;
            }
            let setup = view.borrow_mut().setup(&self.config, &layout);
            if let Err(err) = setup {
                view.borrow_mut().report(err.clone());
                self.retired.push(view);
                return Err(err);
            }
            let id = self.model.subscribe(view.clone());
            self.views.push((id, view));
        }
        self.phase = SessionPhase::ViewsCreated;
        tracing::info!(views = self.views.len(), "views subscribed");
        Ok(())
    }

    /// Opens a writing session and creates the text-mode controller, which
    /// paints every view.
    pub fn start(&mut self, now: Instant) -> Result<(), EditorError> {
        self.model.create_new_session(now)?;
        let controller = Controller::create(Mode::Text.name(), &mut self.model, &self.config)?;
        self.autosave = PeriodicTimer::new(self.config.autosave_period(), now);
        self.status = PeriodicTimer::new(self.config.status_period(), now);
        self.last_key = now;
        self.model.set_status_line(now);
        self.apply_cursor_shape(&controller)
            .and_then(|()| self.console.borrow_mut().flush())
            .map_err(console_failure)?;
        self.controller = Some(controller);
        self.phase = SessionPhase::Running;
        tracing::info!(path = %self.model.path().display(), "session started");
        Ok(())
    }

    /// Ticks until quit or a fatal error.
    pub fn process(&mut self) -> Result<(), EditorError> {
        loop {
            match self.tick(Instant::now()) {
                TickOutcome::Continue => std::thread::yield_now(),
                TickOutcome::Quit => return Ok(()),
                TickOutcome::Fatal(err) => return Err(err),
            }
        }
    }

    /// One loop iteration: timers, then input, then error processing,
    /// refresh and quit.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let Some(mut controller) = self.controller.take() else {
            return TickOutcome::Fatal(EditorError::program(
                codes::MODEL_NOT_READY,
                "session ticked before start",
            ));
        };
        let outcome = self.step(now, &mut controller);
        self.controller = Some(controller);
        outcome
    }

    fn step(&mut self, now: Instant, controller: &mut Controller) -> TickOutcome {
        let mut refresh = false;
        let mut quit = false;

        if self.autosave.poll(now) {
            // Failures are latched on the model.
            let _ = self.model.save();
        }

        if self.status.poll(now) {
            if self.window_changed() {
                refresh = true;
            } else {
                self.model.set_status_line(now);
                if let Err(err) = self.model.pause_processing(now, self.last_key, false) {
                    self.model.report(err);
                }
            }
        }

        match self.next_key() {
            Ok(Some(key)) => {
                self.last_key = now;
                if let Err(err) = self.model.pause_processing(now, now, true) {
                    self.model.report(err);
                }
                if !self.errors.acknowledge() {
                    self.model.clear_msg_line();
                    match self.dispatch(controller, key) {
                        DispatchOutcome::Continue => {}
                        DispatchOutcome::Refresh => refresh = true,
                        DispatchOutcome::Quit => quit = true,
                        DispatchOutcome::Help => self.launch_help(controller),
                        DispatchOutcome::Switch(mode) => self.switch_mode(controller, mode),
                    }
                }
                if let Err(err) = self.apply_cursor_shape(controller) {
                    controller.report(console_failure(err));
                }
            }
            Ok(None) => {}
            Err(err) => {
                controller.report(console_failure(err));
            }
        }

        if let ErrorVerdict::Stop(err) = self.errors.process(controller, &mut self.model) {
            return TickOutcome::Fatal(err);
        }

        if refresh {
            let applied = self
                .console
                .borrow_mut()
                .apply_settings(&self.console_settings);
            match applied {
                Ok(()) => self.model.refresh(),
                Err(err) => {
                    controller.report(console_failure(err));
                }
            }
        }

        if let Err(err) = self.console.borrow_mut().flush() {
            controller.report(console_failure(err));
        }

        if quit {
            tracing::info!("quit requested");
            return TickOutcome::Quit;
        }
        TickOutcome::Continue
    }

    /// Closes the writing session, unsubscribes every view and closes the
    /// model with a final save.
    pub fn finish(&mut self, now: Instant) -> Result<(), EditorError> {
        let mut result = Ok(());
        let session_open = self.model.sessions().last().is_some_and(|s| s.is_open());
        if session_open {
            if let Err(err) = self.model.process_session_done(now, self.last_key) {
                self.model.report(err.clone());
                result = Err(err);
            }
        }
        for (id, view) in self.views.drain(..) {
            // Unsubscribing twice is a no-op; only a view left registered fails.
            self.model.unsubscribe(id);
            if self.model.subscribers().contains(id) {
                let err = EditorError::program(
                    codes::UNSUBSCRIBE_FAILED,
                    format!("view '{}' is still subscribed", view.borrow().name()),
                );
                view.borrow_mut().report(err.clone());
                if result.is_ok() {
                    result = Err(err);
                }
            }
            self.retired.push(view);
        }
        let closed = self.model.close(true);
        self.phase = SessionPhase::Finished;
        tracing::info!(saves = self.model.save_count(), "session finished");
        result.and(closed)
    }

    /// Confirms no view is still subscribed and collects view errors left
    /// behind.
    pub fn terminate_views(&mut self) -> Result<(), EditorError> {
        self.residual = self
            .retired
            .iter()
            .filter_map(|view| view.borrow().error_state().get().cloned())
            .collect();
        for err in &self.residual {
            tracing::warn!(code = err.code, "residual view error: {}", err.technical);
        }
        self.phase = SessionPhase::Terminated;
        let remaining = self.model.subscriber_count();
        if remaining > 0 {
            let err = EditorError::program(
                codes::SUBSCRIBERS_REMAIN,
                format!("{remaining} view(s) still subscribed at teardown"),
            );
            self.model.report(err.clone());
            return Err(err);
        }
        Ok(())
    }

    fn is_subscribed(&self, view: &SharedView) -> bool {
        let target = Rc::as_ptr(view) as *const ();
        self.views
            .iter()
            .any(|(_, known)| Rc::as_ptr(known) as *const () == target)
    }

    fn window_changed(&mut self) -> bool {
        let (width, height) = self.window;
        let console = self.console.borrow();
        if !console.is_window_size_changed(width, height) {
            return false;
        }
        if let Ok(size) = console.window_size() {
            self.window = size;
        }
        tracing::debug!(width = self.window.0, height = self.window.1, "window resized");
        true
    }

    fn next_key(&mut self) -> io::Result<Option<KeyEvent>> {
        let mut console = self.console.borrow_mut();
        if !console.is_key_available()? {
            return Ok(None);
        }
        console.read_key(false)
    }

    /// A panic while handling a key becomes an `Exception` on the controller.
    fn dispatch(&mut self, controller: &mut Controller, key: KeyEvent) -> DispatchOutcome {
        let model = &mut self.model;
        let keys = &self.keys;
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            controller.dispatch(key, model, keys)
        }));
        match result {
            Ok(outcome) => outcome,
            Err(payload) => {
                let err = EditorError::exception(
                    codes::PANIC,
                    format!("panic while handling {key:?}: {}", panic_message(&payload)),
                );
                controller.report(err);
                DispatchOutcome::Continue
            }
        }
    }

    fn switch_mode(&mut self, controller: &mut Controller, mode: Mode) {
        match Controller::create(mode.name(), &mut self.model, &self.config) {
            Ok(mut next) => {
                if let Some(err) = controller.error_state().get() {
                    next.error_state_mut().set(err.clone());
                }
                tracing::debug!(from = %controller.mode(), to = %mode, "mode switch");
                *controller = next;
            }
            Err(err) => {
                controller.report(err);
            }
        }
    }

    fn launch_help(&mut self, controller: &mut Controller) {
        match self.help.launch(&self.config.help_url) {
            Ok(text) => self.model.set_cmd_line(text),
            Err(err) => {
                controller.report(err);
            }
        }
    }

    fn apply_cursor_shape(&self, controller: &Controller) -> io::Result<()> {
        let shape = CursorShape::for_mode(controller.insert_mode(), self.config.cursor_size);
        self.console.borrow_mut().set_cursor_shape(shape)
    }
}

fn console_failure(err: io::Error) -> EditorError {
    EditorError::exception(codes::CONSOLE_FAILED, format!("console: {err}"))
}

fn panic_message(payload: &Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/session.rs"]
mod tests;
