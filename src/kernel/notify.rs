//! Change notifications from the document model to its views.
//!
//! The registry is ordered: views are updated in the order they subscribed,
//! once per notification, synchronously inside the mutating call.

use super::document::DocumentModel;
use crate::views::View;
use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::rc::Rc;

new_key_type! {
    pub struct SubscriberId;
}

pub type SharedView = Rc<RefCell<dyn View>>;

/// What part of the document state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Unconditional full redraw in every view.
    All,
    Cursor,
    /// The cursor line changed.
    Line,
    /// Lines from the cursor row down changed.
    End,
    Props,
    StatusLine,
    MsgLine,
    HelpLine,
    Cmd,
    Spell,
}

#[derive(Clone, Copy)]
pub struct ChangeNotification<'a> {
    pub kind: ChangeKind,
    pub document: &'a DocumentModel,
}

impl<'a> ChangeNotification<'a> {
    pub fn new(kind: ChangeKind, document: &'a DocumentModel) -> Self {
        Self { kind, document }
    }

    pub fn is_all(&self) -> bool {
        self.kind == ChangeKind::All
    }
}

#[derive(Default)]
pub struct Subscribers {
    views: SlotMap<SubscriberId, SharedView>,
    order: Vec<SubscriberId>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribing a view that is already registered returns its existing id.
    pub fn subscribe(&mut self, view: SharedView) -> SubscriberId {
        if let Some(id) = self.find(&view) {
            return id;
        }
        let id = self.views.insert(view);
        self.order.push(id);
        id
    }

    /// Returns `false` when `id` is not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        if self.views.remove(id).is_none() {
            return false;
        }
        self.order.retain(|other| *other != id);
        true
    }

    pub fn contains(&self, id: SubscriberId) -> bool {
        self.views.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registered views in subscription order.
    pub fn iter(&self) -> impl Iterator<Item = &SharedView> + '_ {
        self.order.iter().filter_map(|id| self.views.get(*id))
    }

    pub fn notify(&self, notification: &ChangeNotification<'_>) {
        for view in self.iter() {
            view.borrow_mut().on_update(notification);
        }
    }

    fn find(&self, view: &SharedView) -> Option<SubscriberId> {
        let target = Rc::as_ptr(view) as *const ();
        self.order.iter().copied().find(|id| {
            self.views
                .get(*id)
                .is_some_and(|v| Rc::as_ptr(v) as *const () == target)
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/notify.rs"]
mod tests;
