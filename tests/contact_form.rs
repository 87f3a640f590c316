// Copyright 2024 Neatify
// Licensed under MIT OR Apache-2.0
//
// Rendering tests for the contact form: controlled inputs, the submit
// acknowledgment, and the reset that follows it.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use support::{
    bubbling_event, cleanup, input_value, mount, textarea_value, type_into_input,
    type_into_textarea,
};
use wasm_bindgen_test::*;

use neatify_support::components::sections::Contact::ContactSection;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn fill_form(mount: &web_sys::Element) {
    type_into_input(mount, "#name", "Taro Yamada");
    type_into_input(mount, "#email", "taro@example.com");
    type_into_input(mount, "#subject", "Question");
    type_into_textarea(mount, "#message", "How does scoring work?");
}

fn submit(mount: &web_sys::Element) {
    mount
        .query_selector("form")
        .unwrap()
        .expect("the contact form should render")
        .dispatch_event(&bubbling_event("submit"))
        .unwrap();
}

fn ack_count(mount: &web_sys::Element) -> u32 {
    mount.query_selector_all("#contact-ack").unwrap().length()
}

#[wasm_bindgen_test]
fn typing_updates_only_the_edited_control() {
    let mount = mount(|| leptos::view! { <ContactSection/> });

    type_into_input(&mount, "#name", "Taro Yamada");

    assert_eq!(input_value(&mount, "#name"), "Taro Yamada");
    assert_eq!(input_value(&mount, "#email"), "");
    assert_eq!(input_value(&mount, "#subject"), "");
    assert_eq!(textarea_value(&mount, "#message"), "");

    cleanup(&mount);
}

#[wasm_bindgen_test]
fn submitting_shows_one_acknowledgment_and_clears_the_form() {
    let mount = mount(|| leptos::view! { <ContactSection/> });

    assert_eq!(ack_count(&mount), 0, "no acknowledgment before submit");

    fill_form(&mount);
    submit(&mount);

    assert_eq!(ack_count(&mount), 1, "exactly one acknowledgment");
    assert_eq!(input_value(&mount, "#name"), "");
    assert_eq!(input_value(&mount, "#email"), "");
    assert_eq!(input_value(&mount, "#subject"), "");
    assert_eq!(textarea_value(&mount, "#message"), "");

    cleanup(&mount);
}

#[wasm_bindgen_test]
fn a_second_submission_starts_from_an_empty_form() {
    let mount = mount(|| leptos::view! { <ContactSection/> });

    fill_form(&mount);
    submit(&mount);

    // Nothing typed since the reset; submit again from the empty state.
    submit(&mount);

    assert_eq!(ack_count(&mount), 1, "the acknowledgment is not duplicated");
    assert_eq!(input_value(&mount, "#name"), "");
    assert_eq!(input_value(&mount, "#email"), "");
    assert_eq!(input_value(&mount, "#subject"), "");
    assert_eq!(textarea_value(&mount, "#message"), "");

    cleanup(&mount);
}

#[wasm_bindgen_test]
fn contact_details_render_the_support_channels() {
    let mount = mount(|| leptos::view! { <ContactSection/> });

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("kotaro17206@icloud.com"), "support email");
    assert!(text.contains("080-4175-5965"), "support phone");

    cleanup(&mount);
}
