// Copyright 2024 Neatify
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for component tests.
//
// Provides mount/cleanup helpers and bubbling-event construction so that
// individual test files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsCast;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Mount a component into a fresh mount point and return that mount point.
pub fn mount<F, N>(f: F) -> web_sys::Element
where
    F: FnOnce() -> N + 'static,
    N: leptos::IntoView,
{
    let mount = create_mount_point();
    leptos::mount_to(mount.clone().unchecked_into(), f);
    mount
}

// ---------------------------------------------------------------------------
// Event dispatch
// ---------------------------------------------------------------------------

/// Build an event that bubbles. Leptos delegates most listeners to the
/// window, so a non-bubbling synthetic event would never reach them.
pub fn bubbling_event(name: &str) -> web_sys::Event {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    web_sys::Event::new_with_event_init_dict(name, &init).unwrap()
}

/// Click the element matching `selector` under `mount`.
pub fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element for {selector}"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

/// Set the value of the `<input>` matching `selector` and fire `input`.
pub fn type_into_input(mount: &web_sys::Element, selector: &str, value: &str) {
    let input = mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no input for {selector}"))
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    input.set_value(value);
    input.dispatch_event(&bubbling_event("input")).unwrap();
}

/// Set the value of the `<textarea>` matching `selector` and fire `input`.
pub fn type_into_textarea(mount: &web_sys::Element, selector: &str, value: &str) {
    let textarea = mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no textarea for {selector}"))
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .unwrap();
    textarea.set_value(value);
    textarea.dispatch_event(&bubbling_event("input")).unwrap();
}

/// Read back the value of the `<input>` matching `selector`.
pub fn input_value(mount: &web_sys::Element, selector: &str) -> String {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no input for {selector}"))
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap()
        .value()
}

/// Read back the value of the `<textarea>` matching `selector`.
pub fn textarea_value(mount: &web_sys::Element, selector: &str) -> String {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no textarea for {selector}"))
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .unwrap()
        .value()
}
