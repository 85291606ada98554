use bitflags::bitflags;

use crate::style::TrailingIcon;

/// Which input policy a field follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldType {
    #[default]
    Name,
    PhoneNumber,
    Email,
    Password,
}

impl FieldType {
    /// Map a raw design-time value (0..=3) onto a field type.
    /// Unknown values fall back to [`FieldType::Name`].
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => FieldType::PhoneNumber,
            2 => FieldType::Email,
            3 => FieldType::Password,
            _ => FieldType::Name,
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            FieldType::Name => 0,
            FieldType::PhoneNumber => 1,
            FieldType::Email => 2,
            FieldType::Password => 3,
        }
    }

    /// Keyboard and content hints for the text box.
    pub fn input_traits(self) -> InputTraits {
        match self {
            FieldType::Name => InputTraits::empty(),
            FieldType::PhoneNumber => InputTraits::PHONE_PAD,
            FieldType::Email => InputTraits::EMAIL_CONTENT | InputTraits::NO_AUTOCORRECT,
            FieldType::Password => InputTraits::PASSWORD_CONTENT,
        }
    }

    /// Icon the trailing button starts out with.
    pub fn trailing_icon(self) -> TrailingIcon {
        match self {
            FieldType::Password => TrailingIcon::PasswordHidden,
            _ => TrailingIcon::Clear,
        }
    }

    pub fn is_password(self) -> bool {
        self == FieldType::Password
    }
}

bitflags! {
    /// Hints the toolkit applies to its text box.
    /// Masking is separate: it changes at runtime and travels as `SetSecureEntry`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct InputTraits: u8 {
        /// Show the phone keypad
        const PHONE_PAD        = 0b0_0010;
        /// Turn off autocorrection
        const NO_AUTOCORRECT   = 0b0_0100;
        /// Content is a password (enables password autofill)
        const PASSWORD_CONTENT = 0b0_1000;
        /// Content is an email address
        const EMAIL_CONTENT    = 0b1_0000;
    }
}

/// Result of the last externally reported validation of a password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordValidity {
    #[default]
    Valid,
    /// The owning screen reported an error; the next delete wipes the field.
    Invalid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        assert_eq!(FieldType::from_raw(0), FieldType::Name);
        assert_eq!(FieldType::from_raw(1), FieldType::PhoneNumber);
        assert_eq!(FieldType::from_raw(2), FieldType::Email);
        assert_eq!(FieldType::from_raw(3), FieldType::Password);
        assert_eq!(FieldType::from_raw(4), FieldType::Name);
        assert_eq!(FieldType::from_raw(-1), FieldType::Name);
    }

    #[test]
    fn test_raw_roundtrip() {
        for ty in [
            FieldType::Name,
            FieldType::PhoneNumber,
            FieldType::Email,
            FieldType::Password,
        ] {
            assert_eq!(FieldType::from_raw(ty.raw()), ty);
        }
    }

    #[test]
    fn test_input_traits() {
        assert!(FieldType::Name.input_traits().is_empty());
        assert_eq!(FieldType::PhoneNumber.input_traits(), InputTraits::PHONE_PAD);
        assert!(FieldType::Email
            .input_traits()
            .contains(InputTraits::NO_AUTOCORRECT));
        assert_eq!(FieldType::Password.input_traits(), InputTraits::PASSWORD_CONTENT);
    }

    #[test]
    fn test_trailing_icon() {
        assert_eq!(FieldType::Password.trailing_icon(), TrailingIcon::PasswordHidden);
        assert_eq!(FieldType::Email.trailing_icon(), TrailingIcon::Clear);
        assert_eq!(FieldType::Name.trailing_icon(), TrailingIcon::Clear);
    }
}
