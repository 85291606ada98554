//! An in-memory [`FieldView`] that keeps the state a real toolkit would show.
//!
//! Useful for tests, for previews that run without a display, and as a
//! reference for toolkit bindings.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::field_type::InputTraits;
use crate::input_field::InputField;
use crate::style::{Color, Spacing, TrailingIcon};
use crate::view::{DeferredQueue, DeferredTask, FieldView, ViewCommand};

#[derive(Debug, Default)]
pub struct HeadlessView {
    pub text: String,
    pub text_color: Color,
    pub underline_color: Color,
    pub description_color: Color,
    pub description_text: String,
    pub description_visible: bool,
    pub trailing_visible: bool,
    pub trailing_icon: Option<TrailingIcon>,
    pub secure_entry: bool,
    pub input_traits: InputTraits,
    pub placeholder: String,
    pub font_size: f32,
    pub spacing: Spacing,
    pub focused: bool,
    deferred: DeferredQueue,
    history: Vec<ViewCommand>,
}

impl HeadlessView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands applied since the last call, oldest first.
    pub fn take_history(&mut self) -> Vec<ViewCommand> {
        std::mem::take(&mut self.history)
    }

    pub fn history(&self) -> &[ViewCommand] {
        &self.history
    }

    /// Tasks posted but not yet run.
    pub fn pending_tasks(&self) -> usize {
        self.deferred.len()
    }

    /// Finish the current pass: run every deferred task.
    pub fn run_deferred(&mut self) {
        for task in self.deferred.drain() {
            match task {
                DeferredTask::Focus => self.focused = true,
            }
        }
    }

    /// Text as it appears on screen.
    pub fn display_text(&self) -> String {
        if self.secure_entry {
            "•".repeat(self.text.graphemes(true).count())
        } else {
            self.text.clone()
        }
    }
}

impl FieldView for HeadlessView {
    fn apply(&mut self, command: ViewCommand) {
        match &command {
            ViewCommand::SetText(text) => self.text = text.clone(),
            ViewCommand::SetTextColor(color) => self.text_color = *color,
            ViewCommand::SetUnderlineColor(color) => self.underline_color = *color,
            ViewCommand::SetDescriptionColor(color) => self.description_color = *color,
            ViewCommand::SetDescriptionText(text) => self.description_text = text.clone(),
            ViewCommand::SetDescriptionVisible(visible) => self.description_visible = *visible,
            ViewCommand::SetTrailingVisible(visible) => self.trailing_visible = *visible,
            ViewCommand::SetTrailingIcon(icon) => self.trailing_icon = Some(*icon),
            ViewCommand::SetSecureEntry(secure) => self.secure_entry = *secure,
            ViewCommand::SetInputTraits(traits) => self.input_traits = *traits,
            ViewCommand::SetPlaceholder(placeholder) => self.placeholder = placeholder.clone(),
            ViewCommand::SetFontSize(size) => self.font_size = *size,
            ViewCommand::SetSpacing(spacing) => self.spacing = *spacing,
        }
        self.history.push(command);
    }

    fn post(&mut self, task: DeferredTask) {
        self.deferred.post(task);
    }
}

/// Keystroke simulation. Mirrors what a toolkit does: propose the edit, then
/// commit it to the text box only if the field accepts it.
impl InputField<HeadlessView> {
    pub fn type_edit(&mut self, range: Range<usize>, replacement: &str) -> bool {
        let current = self.view().text.clone();
        let accepted = self.on_edit_attempt(&current, range, replacement);
        if accepted {
            let committed = self.text().to_string();
            self.view_mut().text = committed;
        }
        accepted
    }

    /// Type `text` one user-perceived character at a time at the end of
    /// the field. Returns how many keystrokes were accepted.
    pub fn type_text(&mut self, text: &str) -> usize {
        let mut accepted = 0;
        for cluster in text.graphemes(true) {
            let end = self.view().text.chars().count();
            if self.type_edit(end..end, cluster) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Delete the last character.
    pub fn backspace(&mut self) -> bool {
        let end = self.view().text.chars().count();
        self.type_edit(end.saturating_sub(1)..end, "")
    }
}
