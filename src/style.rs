//! Colors, spacing presets and icons used by the field.

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const DARK_GRAY: Color = Color::rgb(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0);
    pub const LIGHT_GRAY: Color = Color::rgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

/// The three colors a display state paints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSet {
    pub text: Color,
    pub underline: Color,
    pub description: Color,
}

/// Visual feedback state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayState {
    Active,
    #[default]
    Inactive,
    Error,
}

impl DisplayState {
    pub const fn colors(self) -> ColorSet {
        match self {
            DisplayState::Active => ColorSet {
                text: Color::BLACK,
                underline: Color::BLUE,
                description: Color::DARK_GRAY,
            },
            DisplayState::Inactive => ColorSet {
                text: Color::BLACK,
                underline: Color::LIGHT_GRAY,
                description: Color::DARK_GRAY,
            },
            DisplayState::Error => ColorSet {
                text: Color::RED,
                underline: Color::RED,
                description: Color::RED,
            },
        }
    }
}

/// Vertical spacing preset.
///
/// Applies to the gap above the text box and the gap between the text box
/// and its underline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Spacing {
    #[default]
    Regular,
    /// Tighter layout for small screens.
    Compact,
}

impl Spacing {
    pub const fn points(self) -> f32 {
        match self {
            Spacing::Regular => 12.0,
            Spacing::Compact => 8.0,
        }
    }
}

/// Icon shown on the trailing button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingIcon {
    Clear,
    /// Password is masked.
    PasswordHidden,
    /// Password is shown in plain text.
    PasswordVisible,
}

impl TrailingIcon {
    /// System symbol name the toolkit should load.
    pub const fn symbol_name(self) -> &'static str {
        match self {
            TrailingIcon::Clear => "clear",
            TrailingIcon::PasswordHidden => "eye.slash",
            TrailingIcon::PasswordVisible => "eye",
        }
    }

    pub(crate) const fn for_masking(masked: bool) -> Self {
        if masked {
            TrailingIcon::PasswordHidden
        } else {
            TrailingIcon::PasswordVisible
        }
    }
}
