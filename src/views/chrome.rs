//! One-line views around the edit area: status, help, message and command.

use super::canvas::ViewBase;
use super::layout::ScreenLayout;
use super::palette::{ColourPair, Palette};
use super::View;
use crate::core::error::{EditorError, ErrorReporter, ErrorState};
use crate::core::geom::Rect;
use crate::kernel::document::DocumentModel;
use crate::kernel::notify::{ChangeKind, ChangeNotification};
use crate::services::config::EditorConfig;
use crate::tui::console::SharedConsole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Status,
    Help,
    Message,
    Command,
}

impl LineRole {
    pub const ALL: [LineRole; 4] = [
        LineRole::Status,
        LineRole::Help,
        LineRole::Message,
        LineRole::Command,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LineRole::Status => "status",
            LineRole::Help => "help",
            LineRole::Message => "message",
            LineRole::Command => "command",
        }
    }

    /// The notification kind this line redraws on, besides `All`.
    pub fn kind(self) -> ChangeKind {
        match self {
            LineRole::Status => ChangeKind::StatusLine,
            LineRole::Help => ChangeKind::HelpLine,
            LineRole::Message => ChangeKind::MsgLine,
            LineRole::Command => ChangeKind::Cmd,
        }
    }

    fn region(self, layout: &ScreenLayout) -> Rect {
        match self {
            LineRole::Status => layout.status,
            LineRole::Help => layout.help,
            LineRole::Message => layout.message,
            LineRole::Command => layout.command,
        }
    }

    fn colours(self, palette: &Palette) -> ColourPair {
        match self {
            LineRole::Status => palette.status,
            LineRole::Help => palette.help,
            LineRole::Message => palette.message,
            LineRole::Command => palette.command,
        }
    }

    fn text(self, doc: &DocumentModel) -> &str {
        match self {
            LineRole::Status => doc.status_line(),
            LineRole::Help => doc.help_line(),
            LineRole::Message => doc.msg_line(),
            LineRole::Command => doc.cmd_line(),
        }
    }
}

pub struct LineView {
    role: LineRole,
    base: ViewBase,
}

impl LineView {
    pub fn new(role: LineRole, console: SharedConsole) -> Self {
        Self {
            role,
            base: ViewBase::new(role.name(), console),
        }
    }

    pub fn role(&self) -> LineRole {
        self.role
    }

    pub fn text(&self) -> &str {
        self.base.line_text(0)
    }
}

impl View for LineView {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn setup(&mut self, config: &EditorConfig, layout: &ScreenLayout) -> Result<(), EditorError> {
        let palette = Palette::for_scheme(config.colour_scheme);
        self.base
            .bind(self.role.region(layout), self.role.colours(&palette));
        self.base.clear()
    }

    fn on_update(&mut self, notification: &ChangeNotification<'_>) {
        if !self.base.is_ready() {
            return;
        }
        if !notification.is_all() && notification.kind != self.role.kind() {
            return;
        }
        self.base.begin_repaint();
        let text = self.role.text(notification.document);
        if let Err(err) = self.base.display_line(0, 0, text, true) {
            self.report(err);
        }
    }

    fn is_ready(&self) -> bool {
        self.base.is_ready()
    }

    fn rendered_lines(&self) -> &[String] {
        self.base.rendered_lines()
    }

    fn repaint_count(&self) -> usize {
        self.base.repaint_count()
    }
}

impl ErrorReporter for LineView {
    fn error_state(&self) -> &ErrorState {
        &self.base.error
    }

    fn error_state_mut(&mut self) -> &mut ErrorState {
        &mut self.base.error
    }
}
