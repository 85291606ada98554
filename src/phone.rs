//! Phone number formatting.
//!
//! Produces the North American display form `(DDD) DDD-DDDD` from whatever the
//! user has typed so far. Separators are stripped, input is capped at ten
//! characters, and partial numbers get as much of the pattern as they fill.
//! Anything the patterns do not match is returned as the bare stripped string.

use std::sync::LazyLock;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;

/// Longest number the field keeps.
pub const MAX_DIGITS: usize = 10;

/// Below this many characters only the area code is split off.
const LONG_FORM_THRESHOLD: usize = 7;

type Pattern = LazyLock<std::result::Result<Regex, regex::Error>>;

/// Whitespace, dashes and parentheses left over from earlier formatting.
static SEPARATORS: Pattern = LazyLock::new(|| Regex::new(r"[\s\-\(\)]"));

/// Area code followed by at least one more digit.
static SHORT_FORM: Pattern = LazyLock::new(|| Regex::new(r"(\d{3})(\d+)"));

/// Area code, exchange, then the line number.
static LONG_FORM: Pattern = LazyLock::new(|| Regex::new(r"(\d{3})(\d{3})(\d+)"));

fn compiled(pattern: &'static Pattern) -> Result<&'static Regex> {
    match LazyLock::force(pattern) {
        Ok(regex) => Ok(regex),
        Err(err) => Err(err.clone().into()),
    }
}

/// Format `raw` for display, degrading to an empty string if the patterns
/// cannot be compiled.
///
/// ```
/// use form_field::phone;
///
/// assert_eq!(phone::format("123-456 7890", false), "(123) 456-7890");
/// assert_eq!(phone::format("12", false), "12");
/// ```
pub fn format(raw: &str, remove_last_digit: bool) -> String {
    match try_format(raw, remove_last_digit) {
        Ok(formatted) => formatted,
        Err(err) => {
            log::warn!("Phone formatting unavailable: {}", err);
            String::new()
        }
    }
}

/// Fallible form of [`format`].
pub fn try_format(raw: &str, remove_last_digit: bool) -> Result<String> {
    if raw.is_empty() {
        return Ok(String::new());
    }

    let stripped = compiled(&SEPARATORS)?.replace_all(raw, "");
    // Counted in user-perceived characters, as the keypad enters them
    let mut kept: Vec<&str> = stripped.graphemes(true).take(MAX_DIGITS).collect();

    if remove_last_digit {
        kept.pop();
    }

    let number = kept.concat();
    let formatted = if kept.len() < LONG_FORM_THRESHOLD {
        compiled(&SHORT_FORM)?.replace_all(&number, "(${1}) ${2}")
    } else {
        compiled(&LONG_FORM)?.replace_all(&number, "(${1}) ${2}-${3}")
    };

    Ok(formatted.into_owned())
}
