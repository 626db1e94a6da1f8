//! Editor runtime core:
//! - notify: the ordered subscriber registry and change notifications
//! - document: the observed document model
//! - controller: per-mode key interpretation

pub mod controller;
pub mod document;
pub mod notify;

pub use controller::{Controller, DispatchOutcome};
pub use document::{DocumentModel, SpellTarget};
pub use notify::{ChangeKind, ChangeNotification, SharedView, SubscriberId, Subscribers};
