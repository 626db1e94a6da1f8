//! Views: render adapters bound to a fixed screen region.
//!
//! A view reads the document through the notification it receives and writes
//! to the console. It never mutates the document.

pub mod canvas;
pub mod chrome;
pub mod layout;
pub mod palette;
pub mod properties;
pub mod spelling;
pub mod text_edit;
pub mod viewport;

use crate::core::error::{EditorError, ErrorReporter};
use crate::kernel::notify::{ChangeNotification, SharedView};
use crate::services::config::EditorConfig;
use crate::tui::console::SharedConsole;
use std::cell::RefCell;
use std::rc::Rc;

pub use canvas::ViewBase;
pub use chrome::{LineRole, LineView};
pub use layout::ScreenLayout;
pub use palette::Palette;
pub use properties::PropertiesView;
pub use spelling::SpellingView;
pub use text_edit::TextEditView;
pub use viewport::Viewport;

pub trait View: ErrorReporter {
    fn name(&self) -> &str;

    /// Binds the view to its region and paints its initial chrome.
    fn setup(&mut self, config: &EditorConfig, layout: &ScreenLayout) -> Result<(), EditorError>;

    /// Failures are latched on the view's own error slot.
    fn on_update(&mut self, notification: &ChangeNotification<'_>);

    fn is_ready(&self) -> bool;

    /// What the view last drew, one entry per region row.
    fn rendered_lines(&self) -> &[String];

    /// Full-region repaints so far.
    fn repaint_count(&self) -> usize;
}

pub fn shared_view<V: View + 'static>(view: V) -> (Rc<RefCell<V>>, SharedView) {
    let concrete = Rc::new(RefCell::new(view));
    let shared: SharedView = concrete.clone();
    (concrete, shared)
}

/// The standard view set in subscription order: chrome first, then the
/// cursor-owning edit views.
pub fn standard_views(console: &SharedConsole) -> Vec<SharedView> {
    let mut views: Vec<SharedView> = LineRole::ALL
        .iter()
        .map(|role| {
            let view: SharedView = Rc::new(RefCell::new(LineView::new(*role, console.clone())));
            view
        })
        .collect();
    views.push(Rc::new(RefCell::new(TextEditView::new(console.clone()))));
    views.push(Rc::new(RefCell::new(PropertiesView::new(console.clone()))));
    views.push(Rc::new(RefCell::new(SpellingView::new(console.clone()))));
    views
}
