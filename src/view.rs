//! The boundary between the field controller and whatever draws it.
//!
//! The controller never touches a widget directly. It emits [`ViewCommand`]s
//! for immediate changes and posts [`DeferredTask`]s for work that has to
//! wait until the toolkit finishes its current layout pass.

use crate::field_type::InputTraits;
use crate::style::{Color, Spacing, TrailingIcon};

/// A single change to one of the field's visual elements.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Replace the text box contents
    SetText(String),
    SetTextColor(Color),
    SetUnderlineColor(Color),
    SetDescriptionColor(Color),
    SetDescriptionText(String),
    SetDescriptionVisible(bool),
    SetTrailingVisible(bool),
    SetTrailingIcon(TrailingIcon),
    /// Mask or unmask the text box
    SetSecureEntry(bool),
    SetInputTraits(InputTraits),
    SetPlaceholder(String),
    SetFontSize(f32),
    SetSpacing(Spacing),
}

/// Work the toolkit runs on the UI thread after the current layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeferredTask {
    /// Give the text box keyboard focus
    Focus,
}

/// Render sink and task poster for an [`InputField`](crate::InputField).
pub trait FieldView {
    /// Apply a command immediately.
    fn apply(&mut self, command: ViewCommand);

    /// Schedule a task for after the current layout pass.
    ///
    /// Fire-and-forget: there is no cancellation and a later layout may
    /// supersede the task.
    fn post(&mut self, task: DeferredTask);
}

impl<V: FieldView + ?Sized> FieldView for Box<V> {
    fn apply(&mut self, command: ViewCommand) {
        (**self).apply(command);
    }

    fn post(&mut self, task: DeferredTask) {
        (**self).post(task);
    }
}

/// Pending deferred tasks, in posting order.
///
/// Posting a task that is already pending is a no-op, so a burst of focus
/// requests within one pass runs once.
#[derive(Debug, Default)]
pub struct DeferredQueue {
    pending: Vec<DeferredTask>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&mut self, task: DeferredTask) {
        if !self.pending.contains(&task) {
            self.pending.push(task);
        }
    }

    /// Take every pending task. Call once per pass, after layout.
    pub fn drain(&mut self) -> Vec<DeferredTask> {
        std::mem::take(&mut self.pending)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
