//! Drives a four-field sign-up form through a scripted session and logs what
//! the screen would show. Run with `RUST_LOG=debug` to see state changes.

use form_field::phone;
use form_field::prelude::*;

fn describe(label: &str, field: &InputField<HeadlessView>) {
    let view = field.view();
    log::info!(
        "{:<9} text={:?} state={:?} button={} label={}",
        label,
        view.display_text(),
        field.state(),
        if view.trailing_visible {
            view.trailing_icon.map(|icon| icon.symbol_name()).unwrap_or("-")
        } else {
            "hidden"
        },
        if view.description_visible {
            view.description_text.as_str()
        } else {
            "hidden"
        },
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut name = InputField::new(
        HeadlessView::new(),
        FieldConfig::new(FieldType::Name).placeholder("Full name"),
    )
    .on_text_changed(|text| log::debug!("name changed: {}", text));

    let mut phone_field = InputField::new(
        HeadlessView::new(),
        FieldConfig::new(FieldType::PhoneNumber).placeholder("Phone"),
    );

    let mut email = InputField::new(
        HeadlessView::new(),
        FieldConfig::new(FieldType::Email)
            .placeholder("Email")
            .description("Enter a valid email address"),
    );

    let mut password = InputField::new(
        HeadlessView::new(),
        FieldConfig::new(FieldType::Password).placeholder("Password").compact(),
    );

    name.request_focus();
    name.view_mut().run_deferred();
    name.on_focus_in();
    name.type_text("Ada Lovelace of Byron");
    describe("name", &name);

    phone_field.on_focus_in();
    phone_field.set_text(phone::format("5558675309", false));
    describe("phone", &phone_field);

    email.on_focus_in();
    email.type_text("ada@");
    email.set_state(DisplayState::Error);
    describe("email", &email);
    email.type_text("example.com");
    describe("email", &email);

    password.on_focus_in();
    password.type_text("hunter2");
    password.set_state(DisplayState::Error);
    describe("password", &password);
    password.backspace();
    describe("password", &password);
    password.type_text("c0rrect-horse!");
    password.on_trailing_tap();
    describe("password", &password);
}
