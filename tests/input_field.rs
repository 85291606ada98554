use std::cell::RefCell;
use std::rc::Rc;

use form_field::prelude::*;
use form_field::{InputTraits, MAX_NAME_LENGTH, PASSWORD_HINT};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build a headless field and a log of every text-changed notification.
fn field_with_log(field_type: FieldType) -> (InputField<HeadlessView>, Rc<RefCell<Vec<String>>>) {
    init_logging();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = log.clone();
    let field = InputField::new(HeadlessView::new(), FieldConfig::new(field_type))
        .on_text_changed(move |text| sink.borrow_mut().push(text.to_string()));
    (field, log)
}

#[test]
fn test_name_accepts_up_to_sixteen_characters() {
    let (mut field, log) = field_with_log(FieldType::Name);
    let fifteen = "a".repeat(MAX_NAME_LENGTH - 1);
    field.set_text(fifteen.clone());

    assert!(field.on_edit_attempt(&fifteen, 15..15, "b"));
    assert_eq!(field.text().chars().count(), 16);

    let sixteen = field.text().to_string();
    assert!(!field.on_edit_attempt(&sixteen, 16..16, "c"));
    assert_eq!(field.text(), sixteen);

    // The refused candidate was still reported
    let last = log.borrow().last().cloned().unwrap();
    assert_eq!(last.chars().count(), 17);
}

#[test]
fn test_name_typing_stops_at_limit() {
    let (mut field, _log) = field_with_log(FieldType::Name);
    let accepted = field.type_text("abcdefghijklmnopqrstuvwxyz");
    assert_eq!(accepted, MAX_NAME_LENGTH);
    assert_eq!(field.view().text, "abcdefghijklmnop");
}

#[test]
fn test_password_delete_after_error_wipes_field() {
    let (mut field, log) = field_with_log(FieldType::Password);
    assert_eq!(field.type_text("hunter2!"), 8);

    field.set_state(DisplayState::Error);
    assert_eq!(field.password_validity(), PasswordValidity::Invalid);
    assert_eq!(field.state(), DisplayState::Error);

    assert!(!field.backspace());
    assert_eq!(field.text(), "");
    assert_eq!(field.view().text, "");
    assert_eq!(log.borrow().last().map(String::as_str), Some(""));
    assert_eq!(field.state(), DisplayState::Active);
    assert_eq!(field.password_validity(), PasswordValidity::Valid);

    // Validity was reset, so deletes go back to removing one character
    field.type_text("ab");
    assert!(field.backspace());
    assert_eq!(field.view().text, "a");
}

#[test]
fn test_password_typing_shows_hint_and_activates() {
    let (mut field, _log) = field_with_log(FieldType::Password);
    field.set_state(DisplayState::Error);

    assert!(field.type_edit(0..0, "x"));
    assert_eq!(field.state(), DisplayState::Active);
    assert_eq!(field.password_validity(), PasswordValidity::Valid);
    assert!(field.view().description_visible);
    assert_eq!(field.view().description_text, PASSWORD_HINT);
}

#[test]
fn test_password_button_stays_visible_when_empty() {
    let (mut field, _log) = field_with_log(FieldType::Password);
    field.type_text("a");
    assert!(field.backspace());
    assert_eq!(field.view().text, "");
    assert!(field.view().trailing_visible);
}

#[test]
fn test_password_tap_toggles_masking() {
    let (mut field, log) = field_with_log(FieldType::Password);
    field.type_text("secret");
    let notifications = log.borrow().len();

    field.on_trailing_tap();
    assert!(!field.is_masked());
    assert!(!field.view().secure_entry);
    assert_eq!(field.view().trailing_icon, Some(TrailingIcon::PasswordVisible));
    assert_eq!(field.view().display_text(), "secret");

    field.on_trailing_tap();
    assert!(field.is_masked());
    assert_eq!(field.view().trailing_icon, Some(TrailingIcon::PasswordHidden));
    assert_eq!(field.view().display_text(), "••••••");

    // Toggling never touches the text
    assert_eq!(field.text(), "secret");
    assert_eq!(log.borrow().len(), notifications);
}

#[test]
fn test_email_error_toggles_description() {
    let (mut field, _log) = field_with_log(FieldType::Email);
    field.set_state(DisplayState::Error);
    assert!(field.view().description_visible);
    assert_eq!(field.view().underline_color, Color::RED);

    field.set_state(DisplayState::Active);
    assert!(!field.view().description_visible);
    assert_eq!(field.view().underline_color, Color::BLUE);
}

#[test]
fn test_email_typing_clears_error() {
    let (mut field, log) = field_with_log(FieldType::Email);
    field.set_state(DisplayState::Error);

    assert_eq!(field.type_text("a@b.co"), 6);
    assert_eq!(field.state(), DisplayState::Active);
    assert!(!field.view().description_visible);
    assert_eq!(log.borrow().last().map(String::as_str), Some("a@b.co"));
}

#[test]
fn test_phone_edit_formats_previous_text() {
    let (mut field, log) = field_with_log(FieldType::PhoneNumber);
    field.set_text("1234567");
    field.view_mut().take_history();

    assert!(!field.type_edit(7..7, "8"));
    assert_eq!(field.view().text, "(123) 456-7");
    assert_eq!(field.text(), "(123) 456-7");
    assert_eq!(log.borrow().last().map(String::as_str), Some("(123) 456-7"));
    assert!(field
        .view()
        .history()
        .contains(&ViewCommand::SetText("(123) 456-7".into())));
}

#[test]
fn test_phone_edit_on_long_input_truncates() {
    let (mut field, _log) = field_with_log(FieldType::PhoneNumber);
    field.set_text("1234567890123");
    field.type_edit(13..13, "4");
    assert_eq!(field.text(), "(123) 456-7890");
}

#[test]
fn test_set_text_always_activates() {
    for field_type in [
        FieldType::Name,
        FieldType::PhoneNumber,
        FieldType::Email,
        FieldType::Password,
    ] {
        let (mut field, log) = field_with_log(field_type);
        field.set_state(DisplayState::Error);
        field.set_text("abc");
        assert_eq!(field.state(), DisplayState::Active, "{:?}", field_type);
        assert_eq!(field.text(), "abc");
        assert_eq!(field.view().text, "abc");
        assert_eq!(log.borrow().last().map(String::as_str), Some("abc"));
    }
}

#[test]
fn test_configure_is_idempotent() {
    for field_type in [
        FieldType::Name,
        FieldType::PhoneNumber,
        FieldType::Email,
        FieldType::Password,
    ] {
        let (mut once, _) = field_with_log(field_type);
        once.configure(field_type);
        let (mut twice, _) = field_with_log(field_type);
        twice.configure(field_type);
        twice.configure(field_type);

        assert_eq!(once.view().trailing_icon, twice.view().trailing_icon);
        assert_eq!(once.view().input_traits, twice.view().input_traits);
        assert_eq!(once.view().secure_entry, twice.view().secure_entry);
        assert_eq!(once.view().input_traits, field_type.input_traits());
    }
}

#[test]
fn test_configure_hints() {
    let (phone, _) = field_with_log(FieldType::PhoneNumber);
    assert_eq!(phone.view().input_traits, InputTraits::PHONE_PAD);
    assert_eq!(phone.view().trailing_icon, Some(TrailingIcon::Clear));

    let (email, _) = field_with_log(FieldType::Email);
    assert!(email.view().input_traits.contains(InputTraits::NO_AUTOCORRECT));
}

#[test]
fn test_clear_button_empties_non_password_field() {
    let (mut field, log) = field_with_log(FieldType::Name);
    field.type_text("Grace");
    field.set_description_text("Looks good");
    assert!(field.view().trailing_visible);

    field.on_trailing_tap();
    assert_eq!(field.text(), "");
    assert_eq!(field.view().text, "");
    assert!(!field.view().trailing_visible);
    assert!(!field.view().description_visible);
    assert_eq!(field.state(), DisplayState::Active);
    assert_eq!(log.borrow().last().map(String::as_str), Some(""));
}

#[test]
fn test_clear_keeps_password_button() {
    let (mut field, _log) = field_with_log(FieldType::Password);
    field.type_text("abc");
    field.set_state(DisplayState::Error);
    field.clear();
    assert!(field.view().trailing_visible);
    assert_eq!(field.password_validity(), PasswordValidity::Valid);
}

#[test]
fn test_trailing_button_hides_when_candidate_empty() {
    let (mut field, _log) = field_with_log(FieldType::Name);
    field.type_text("a");
    assert!(field.view().trailing_visible);
    field.backspace();
    assert!(!field.view().trailing_visible);
}

#[test]
fn test_focus_in_keeps_error() {
    let (mut field, _log) = field_with_log(FieldType::Name);
    assert_eq!(field.state(), DisplayState::Inactive);
    field.on_focus_in();
    assert_eq!(field.state(), DisplayState::Active);

    field.set_state(DisplayState::Error);
    field.on_focus_in();
    assert_eq!(field.state(), DisplayState::Error);
}

#[test]
fn test_out_of_range_edit_is_ignored() {
    let (mut field, log) = field_with_log(FieldType::Name);
    field.view_mut().take_history();

    assert!(!field.on_edit_attempt("abc", 2..9, "x"));
    assert!(field.view().history().is_empty());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_request_focus_is_deferred() {
    let (mut field, _log) = field_with_log(FieldType::Email);
    field.request_focus();
    field.request_focus();
    assert!(!field.view().focused);
    assert_eq!(field.view().pending_tasks(), 1);

    field.view_mut().run_deferred();
    assert!(field.view().focused);
}

#[test]
fn test_event_dispatch() {
    let (mut field, _log) = field_with_log(FieldType::Name);
    assert_eq!(field.event(&FieldEvent::FocusIn), EventResponse::Handled);
    assert_eq!(field.state(), DisplayState::Active);

    let edit = FieldEvent::Edit(EditAttempt::new("", 0..0, "J"));
    assert_eq!(field.event(&edit), EventResponse::Accept);
    assert_eq!(field.text(), "J");

    let too_long = FieldEvent::Edit(EditAttempt::new("J", 1..1, "x".repeat(16)));
    assert_eq!(field.event(&too_long), EventResponse::Reject);

    assert_eq!(field.event(&FieldEvent::TrailingTap), EventResponse::Handled);
    assert_eq!(field.text(), "");
}

#[test]
fn test_name_limit_counts_visible_characters() {
    let (mut field, _log) = field_with_log(FieldType::Name);
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
    let current = format!("{family}Ann");
    field.set_text(current.clone());

    // Twelve accented letters built from combining marks: 16 clusters, 33 scalars
    let accented = "e\u{0301}".repeat(12);
    let end = current.chars().count();
    assert!(field.on_edit_attempt(&current, end..end, &accented));
    assert_eq!(field.text(), format!("{current}{accented}"));

    let full = field.text().to_string();
    let end = full.chars().count();
    assert!(!field.on_edit_attempt(&full, end..end, "e\u{0301}"));
    assert_eq!(field.text(), full);
}

#[test]
fn test_name_typing_keeps_clusters_whole() {
    let (mut field, _log) = field_with_log(FieldType::Name);
    let accepted = field.type_text(&"a\u{0308}".repeat(20));
    assert_eq!(accepted, MAX_NAME_LENGTH);
    assert_eq!(field.view().text, "a\u{0308}".repeat(MAX_NAME_LENGTH));
}

#[test]
fn test_password_unmasking_leaves_content_hints() {
    let (mut field, _log) = field_with_log(FieldType::Password);
    assert_eq!(field.view().input_traits, InputTraits::PASSWORD_CONTENT);
    assert!(field.view().secure_entry);

    field.on_trailing_tap();
    assert!(!field.view().secure_entry);
    assert_eq!(field.view().input_traits, InputTraits::PASSWORD_CONTENT);
}

#[test]
fn test_clear_button_on_email_and_phone_fields() {
    for field_type in [FieldType::Email, FieldType::PhoneNumber] {
        let (mut field, log) = field_with_log(field_type);
        field.set_text("5551234");
        field.set_description_text("Check this value");
        field.view_mut().apply(ViewCommand::SetTrailingVisible(true));

        field.on_trailing_tap();
        assert_eq!(field.text(), "", "{:?}", field_type);
        assert!(!field.view().trailing_visible, "{:?}", field_type);
        assert!(!field.view().description_visible, "{:?}", field_type);
        assert_eq!(field.state(), DisplayState::Active);
        assert_eq!(log.borrow().last().map(String::as_str), Some(""));
    }
}

#[test]
fn test_state_changes_leave_description_alone_on_name_and_phone() {
    for field_type in [FieldType::Name, FieldType::PhoneNumber] {
        let (mut field, _log) = field_with_log(field_type);

        field.set_state(DisplayState::Error);
        assert!(!field.view().description_visible, "{:?}", field_type);

        field.set_description_text("Shown by the screen");
        field.set_state(DisplayState::Active);
        assert!(field.view().description_visible, "{:?}", field_type);
        field.set_state(DisplayState::Error);
        assert!(field.view().description_visible, "{:?}", field_type);
    }
}
