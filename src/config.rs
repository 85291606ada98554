use crate::field_type::FieldType;
use crate::style::Spacing;

/// Set-once configuration of a field, applied by [`InputField::new`].
///
/// [`InputField::new`]: crate::InputField::new
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub field_type: FieldType,
    pub placeholder: Option<String>,
    pub font_size: f32,
    pub description: Option<String>,
    pub description_visible: bool,
    pub spacing: Spacing,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            field_type: FieldType::Name,
            placeholder: None,
            font_size: 16.0,
            description: None,
            description_visible: false,
            spacing: Spacing::Regular,
        }
    }
}

impl FieldConfig {
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            ..Self::default()
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Label text under the field. Does not change visibility.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn description_visible(mut self, visible: bool) -> Self {
        self.description_visible = visible;
        self
    }

    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn compact(self) -> Self {
        self.spacing(Spacing::Compact)
    }
}
