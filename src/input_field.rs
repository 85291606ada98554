//! The input field controller.
//!
//! `InputField` handles:
//! - Per-type keystroke policy (name length cap, phone formatting, email and
//!   password state resets)
//! - Active/inactive/error coloring of text, underline and description label
//! - The trailing button (clear, or show/hide for passwords)
//! - Text-changed notifications to the owning screen
//!
//! Drawing is left to a [`FieldView`]; the controller only tells it what changed.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

use crate::config::FieldConfig;
use crate::error::{FieldError, Result};
use crate::field_type::{FieldType, PasswordValidity};
use crate::phone;
use crate::style::{DisplayState, Spacing, TrailingIcon};
use crate::view::{DeferredTask, FieldView, ViewCommand};

/// Longest name a name field accepts, in user-perceived characters.
pub const MAX_NAME_LENGTH: usize = 16;

/// Hint shown under a password field once the user starts typing.
pub const PASSWORD_HINT: &str = "character + number + special";

/// Type alias for text-changed callbacks
type TextCallback = Box<dyn Fn(&str)>;

/// A proposed change to the text box, delivered before it is committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditAttempt {
    /// Text before the edit
    pub text: String,
    /// Character range of `text` being replaced
    pub range: Range<usize>,
    /// Empty for a delete keystroke
    pub replacement: String,
}

impl EditAttempt {
    pub fn new(
        text: impl Into<String>,
        range: Range<usize>,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            range,
            replacement: replacement.into(),
        }
    }
}

/// Events the toolkit delivers to a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    Edit(EditAttempt),
    /// Text box gained keyboard focus
    FocusIn,
    /// Trailing button was tapped
    TrailingTap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    /// Commit the edit as proposed
    Accept,
    /// Drop the edit; the controller may have replaced the text itself
    Reject,
    Handled,
}

pub struct InputField<V: FieldView> {
    view: V,
    field_type: FieldType,
    state: DisplayState,
    password_validity: PasswordValidity,
    masked: bool,
    // Mirror of what the text box holds after the last handled event
    text: String,
    on_change: Option<TextCallback>,
}

impl<V: FieldView> InputField<V> {
    /// Create a field and push its configuration and initial colors to `view`.
    pub fn new(view: V, config: FieldConfig) -> Self {
        let mut field = Self {
            view,
            field_type: config.field_type,
            state: DisplayState::Inactive,
            password_validity: PasswordValidity::Valid,
            masked: false,
            text: String::new(),
            on_change: None,
        };

        field.configure(config.field_type);
        if let Some(placeholder) = config.placeholder {
            field.set_placeholder(placeholder);
        }
        field.set_font_size(config.font_size);
        if let Some(description) = config.description {
            field.view.apply(ViewCommand::SetDescriptionText(description));
        }
        field.set_description_visible(config.description_visible);
        field.set_spacing(config.spacing);
        field.paint();

        field
    }

    /// Set callback for text changes
    pub fn on_text_changed<F: Fn(&str) + 'static>(mut self, callback: F) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn set_on_text_changed<F: Fn(&str) + 'static>(&mut self, callback: F) {
        self.on_change = Some(Box::new(callback));
    }

    /// Apply the icon, keyboard hints and masking of `field_type`.
    pub fn configure(&mut self, field_type: FieldType) {
        log::debug!("Configuring field as {:?}", field_type);
        self.field_type = field_type;
        self.masked = field_type.is_password();

        self.view.apply(ViewCommand::SetTrailingIcon(field_type.trailing_icon()));
        self.view.apply(ViewCommand::SetInputTraits(field_type.input_traits()));
        self.view.apply(ViewCommand::SetSecureEntry(self.masked));
        if field_type.is_password() {
            self.view.apply(ViewCommand::SetTrailingVisible(true));
        }
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.view.apply(ViewCommand::SetPlaceholder(placeholder.into()));
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.view.apply(ViewCommand::SetFontSize(size));
    }

    /// Replace the description label text and show it.
    pub fn set_description_text(&mut self, text: impl Into<String>) {
        self.set_description_visible(true);
        self.view.apply(ViewCommand::SetDescriptionText(text.into()));
    }

    pub fn set_description_visible(&mut self, visible: bool) {
        self.view.apply(ViewCommand::SetDescriptionVisible(visible));
    }

    /// 12pt gaps around the text box.
    pub fn use_regular_spacing(&mut self) {
        self.set_spacing(Spacing::Regular);
    }

    /// 8pt gaps around the text box, for small screens.
    pub fn use_compact_spacing(&mut self) {
        self.set_spacing(Spacing::Compact);
    }

    fn set_spacing(&mut self, spacing: Spacing) {
        self.view.apply(ViewCommand::SetSpacing(spacing));
    }

    /// Replace the text, notify the listener and return to the active state.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.replace_text(text.clone());
        self.notify_change(&text);
        self.set_state(DisplayState::Active);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Empty the field, as the clear button does.
    pub fn clear(&mut self) {
        self.replace_text(String::new());
        self.notify_change("");
        self.set_display_state(DisplayState::Active);

        if self.field_type.is_password() {
            self.password_validity = PasswordValidity::Valid;
        } else {
            self.view.apply(ViewCommand::SetTrailingVisible(false));
            self.set_description_visible(false);
        }
    }

    /// Report the outcome of validation done by the owning screen.
    pub fn set_state(&mut self, state: DisplayState) {
        match self.field_type {
            FieldType::Password => {
                self.password_validity = if state == DisplayState::Error {
                    PasswordValidity::Invalid
                } else {
                    PasswordValidity::Valid
                };
            }
            FieldType::Email => {
                self.set_description_visible(state == DisplayState::Error);
            }
            FieldType::Name | FieldType::PhoneNumber => {}
        }
        self.set_display_state(state);
    }

    /// Ask for keyboard focus once the toolkit finishes its current layout pass.
    pub fn request_focus(&mut self) {
        self.view.post(DeferredTask::Focus);
    }

    pub fn event(&mut self, event: &FieldEvent) -> EventResponse {
        match event {
            FieldEvent::Edit(attempt) => {
                let range = attempt.range.clone();
                if self.on_edit_attempt(&attempt.text, range, &attempt.replacement) {
                    EventResponse::Accept
                } else {
                    EventResponse::Reject
                }
            }
            FieldEvent::FocusIn => {
                self.on_focus_in();
                EventResponse::Handled
            }
            FieldEvent::TrailingTap => {
                self.on_trailing_tap();
                EventResponse::Handled
            }
        }
    }

    /// Decide whether the toolkit may commit an edit.
    ///
    /// Returns `true` to let the toolkit apply the edit itself. Phone fields
    /// always return `false` after writing the formatted text directly.
    pub fn on_edit_attempt(
        &mut self,
        current_text: &str,
        range: Range<usize>,
        replacement: &str,
    ) -> bool {
        let candidate = match splice(current_text, range, replacement) {
            Ok(candidate) => candidate,
            Err(err) => {
                log::warn!("Rejecting edit: {}", err);
                return false;
            }
        };
        log::trace!(
            "Edit attempt on {:?} field: {} -> {} chars",
            self.field_type,
            current_text.chars().count(),
            candidate.chars().count()
        );

        self.update_trailing_visibility(&candidate);

        match self.field_type {
            FieldType::Name => {
                // Listener sees the candidate even when it is about to be refused
                self.notify_change(&candidate);
                if candidate.graphemes(true).count() > MAX_NAME_LENGTH {
                    return false;
                }
                self.text = candidate;
                true
            }
            FieldType::PhoneNumber => {
                let formatted = phone::format(current_text, false);
                self.replace_text(formatted.clone());
                self.notify_change(&formatted);
                false
            }
            FieldType::Email => {
                self.set_state(DisplayState::Active);
                self.notify_change(&candidate);
                self.text = candidate;
                true
            }
            FieldType::Password => {
                self.set_description_text(PASSWORD_HINT);
                if self.password_validity == PasswordValidity::Invalid && replacement.is_empty() {
                    log::debug!("Delete after failed validation, wiping password");
                    self.clear();
                    false
                } else {
                    self.set_state(DisplayState::Active);
                    self.notify_change(&candidate);
                    self.text = candidate;
                    true
                }
            }
        }
    }

    pub fn on_focus_in(&mut self) {
        if self.state != DisplayState::Error {
            self.set_display_state(DisplayState::Active);
        }
    }

    pub fn on_trailing_tap(&mut self) {
        if self.field_type.is_password() {
            self.masked = !self.masked;
            self.view.apply(ViewCommand::SetTrailingIcon(TrailingIcon::for_masking(self.masked)));
            self.view.apply(ViewCommand::SetSecureEntry(self.masked));
        } else {
            self.clear();
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn state(&self) -> DisplayState {
        self.state
    }

    pub fn password_validity(&self) -> PasswordValidity {
        self.password_validity
    }

    /// Whether the text box currently hides what is typed.
    pub fn is_masked(&self) -> bool {
        self.masked
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }


    fn set_display_state(&mut self, state: DisplayState) {
        if self.state != state {
            log::debug!("Field state {:?} -> {:?}", self.state, state);
        }
        self.state = state;
        self.paint();
    }

    fn paint(&mut self) {
        let colors = self.state.colors();
        self.view.apply(ViewCommand::SetTextColor(colors.text));
        self.view.apply(ViewCommand::SetUnderlineColor(colors.underline));
        self.view.apply(ViewCommand::SetDescriptionColor(colors.description));
    }

    fn replace_text(&mut self, text: String) {
        self.text = text.clone();
        self.view.apply(ViewCommand::SetText(text));
    }

    fn update_trailing_visibility(&mut self, candidate: &str) {
        let visible = self.field_type.is_password() || !candidate.is_empty();
        self.view.apply(ViewCommand::SetTrailingVisible(visible));
    }

    fn notify_change(&self, text: &str) {
        if let Some(ref callback) = self.on_change {
            callback(text);
        }
    }
}

/// Replace the characters of `text` in `range` with `replacement`.
fn splice(text: &str, range: Range<usize>, replacement: &str) -> Result<String> {
    let len = text.chars().count();
    if range.start > range.end || range.end > len {
        return Err(FieldError::InvalidRange {
            start: range.start,
            end: range.end,
            len,
        });
    }

    // Convert character indices to byte indices
    let byte_index = |char_index: usize| {
        text.char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(text.len())
    };
    let byte_start = byte_index(range.start);
    let byte_end = byte_index(range.end);

    let mut spliced = String::with_capacity(text.len() + replacement.len());
    spliced.push_str(&text[..byte_start]);
    spliced.push_str(replacement);
    spliced.push_str(&text[byte_end..]);
    Ok(spliced)
}
