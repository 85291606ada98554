//! Typed input fields for form screens.
//!
//! An [`InputField`] drives a single text box with its underline, trailing
//! button and description label. It supports four field types:
//!
//! - [`FieldType::Name`]: capped at 16 characters
//! - [`FieldType::PhoneNumber`]: reformatted as `(DDD) DDD-DDDD`
//! - [`FieldType::Email`]: autocorrect off, error label shown on failed validation
//! - [`FieldType::Password`]: masked, with a show/hide toggle
//!
//! The field does no drawing of its own. It sends [`ViewCommand`]s to a
//! [`FieldView`] supplied by the toolkit and reports text changes through a
//! callback.
//!
//! ```
//! use form_field::prelude::*;
//!
//! let mut field = InputField::new(HeadlessView::new(), FieldConfig::new(FieldType::Name))
//!     .on_text_changed(|text| println!("name is now {text}"));
//!
//! field.on_focus_in();
//! field.type_text("Ada");
//! assert_eq!(field.text(), "Ada");
//! assert_eq!(field.state(), DisplayState::Active);
//! ```

pub mod config;
pub mod error;
pub mod field_type;
pub mod headless;
pub mod input_field;
pub mod phone;
pub mod style;
pub mod view;

pub use config::FieldConfig;
pub use error::FieldError;
pub use field_type::{FieldType, InputTraits, PasswordValidity};
pub use headless::HeadlessView;
pub use input_field::{
    EditAttempt, EventResponse, FieldEvent, InputField, MAX_NAME_LENGTH, PASSWORD_HINT,
};
pub use style::{Color, ColorSet, DisplayState, Spacing, TrailingIcon};
pub use view::{DeferredQueue, DeferredTask, FieldView, ViewCommand};

pub mod prelude {
    pub use crate::config::FieldConfig;
    pub use crate::field_type::{FieldType, PasswordValidity};
    pub use crate::headless::HeadlessView;
    pub use crate::input_field::{EditAttempt, EventResponse, FieldEvent, InputField};
    pub use crate::style::{Color, DisplayState, Spacing, TrailingIcon};
    pub use crate::view::{DeferredTask, FieldView, ViewCommand};
}
