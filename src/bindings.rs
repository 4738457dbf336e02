//! The wasm entry point and the JS-callable handlers used by the page markup.
//!
//! Handlers keep the names the generated HTML already calls from inline
//! `onclick`/`onchange` attributes. They are module exports and are also
//! installed on `window` at start, where inline attributes look them up.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, Window};

use crate::controller::Controller;
use crate::dom::{ElementKey, WebDom};
use crate::error::UiError;
use crate::storage::BrowserStorage;

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "bindings_test.rs"]
mod bindings_test;

type PageController = Controller<WebDom, BrowserStorage>;

thread_local! {
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

fn with_controller(f: impl FnOnce(&mut PageController)) {
    CONTROLLER.with(|cell| match cell.borrow_mut().as_mut() {
        Some(controller) => f(controller),
        None => log::warn!("page handler called before start"),
    });
}

#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let window = web_sys::window().ok_or(UiError::NoWindow)?;
    let document = window.document().ok_or(UiError::NoDocument)?;
    mount(&window, &document)?;
    Ok(())
}

fn mount(window: &Window, document: &Document) -> Result<(), UiError> {
    let storage = BrowserStorage::new(window, document)?;
    let mut controller = Controller::new(WebDom::new(document.clone()), storage);
    controller.apply_stored_dark_mode();
    let toggle = controller.element(&ElementKey::DarkModeToggle);
    CONTROLLER.with(|cell| *cell.borrow_mut() = Some(controller));

    install_handlers(window)?;
    match toggle {
        Some(button) => attach_dark_mode_toggle(&button)?,
        None => log::debug!("no dark mode toggle on this page"),
    }
    run_on_load(window, document)
}

fn install_handlers(window: &Window) -> Result<(), UiError> {
    let handlers = [
        ("toggleDarkMode", Closure::<dyn Fn()>::new(toggle_dark_mode).into_js_value()),
        ("enableCookie", Closure::<dyn Fn()>::new(enable_cookie).into_js_value()),
        ("disableCookie", Closure::<dyn Fn()>::new(disable_cookie).into_js_value()),
        ("selectLanguage", Closure::<dyn Fn(i32)>::new(select_language).into_js_value()),
        (
            "changeSort",
            Closure::<dyn Fn(String, u32)>::new(|list: String, key: u32| change_sort(&list, key))
                .into_js_value(),
        ),
        (
            "onChangeSort",
            Closure::<dyn Fn(HtmlSelectElement)>::new(|select: HtmlSelectElement| {
                on_change_sort(&select)
            })
            .into_js_value(),
        ),
        (
            "hideClass",
            Closure::<dyn Fn(String)>::new(|class: String| hide_class(&class)).into_js_value(),
        ),
        (
            "showClass",
            Closure::<dyn Fn(String)>::new(|class: String| show_class(&class)).into_js_value(),
        ),
        (
            "onCheckDisplay",
            Closure::<dyn Fn(HtmlInputElement, String, Option<String>)>::new(
                |checkbox: HtmlInputElement, show: String, hide: Option<String>| {
                    on_check_display(&checkbox, &show, hide)
                },
            )
            .into_js_value(),
        ),
        ("onToggleNavbarMenu", Closure::<dyn Fn()>::new(on_toggle_navbar_menu).into_js_value()),
        (
            "onShowMapExplain",
            Closure::<dyn Fn(String)>::new(|id: String| on_show_map_explain(&id)).into_js_value(),
        ),
        ("scaleUpMap", Closure::<dyn Fn()>::new(scale_up_map).into_js_value()),
        ("scaleDownMap", Closure::<dyn Fn()>::new(scale_down_map).into_js_value()),
        ("switchMapLayer", Closure::<dyn Fn()>::new(switch_map_layer).into_js_value()),
        (
            "changeMapFilter",
            Closure::<dyn Fn(String)>::new(|filter: String| change_map_filter(&filter))
                .into_js_value(),
        ),
    ];
    for (name, handler) in handlers {
        js_sys::Reflect::set(window, &JsValue::from_str(name), &handler)
            .map_err(|e| UiError::js(&e))?;
    }
    Ok(())
}

fn attach_dark_mode_toggle(button: &Element) -> Result<(), UiError> {
    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        with_controller(|c| c.toggle_dark_mode());
    });
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| UiError::js(&e))?;
    on_click.forget();
    Ok(())
}

// The module may finish instantiating after `load` has already fired.
fn run_on_load(window: &Window, document: &Document) -> Result<(), UiError> {
    if document.ready_state() == "complete" {
        with_controller(|c| c.on_load());
        return Ok(());
    }
    let on_load = Closure::<dyn FnMut()>::new(move || with_controller(|c| c.on_load()));
    window
        .add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())
        .map_err(|e| UiError::js(&e))?;
    on_load.forget();
    Ok(())
}

#[wasm_bindgen(js_name = toggleDarkMode)]
pub fn toggle_dark_mode() {
    with_controller(|c| c.toggle_dark_mode());
}

#[wasm_bindgen(js_name = enableCookie)]
pub fn enable_cookie() {
    with_controller(|c| c.set_consent(true));
}

#[wasm_bindgen(js_name = disableCookie)]
pub fn disable_cookie() {
    with_controller(|c| c.set_consent(false));
}

#[wasm_bindgen(js_name = selectLanguage)]
pub fn select_language(language: i32) {
    match usize::try_from(language) {
        Ok(index) => with_controller(|c| c.select_language(index)),
        Err(_) => log::debug!("ignoring language index {language}"),
    }
}

#[wasm_bindgen(js_name = changeSort)]
pub fn change_sort(list: &str, key: u32) {
    with_controller(|c| c.change_sort(list, key as usize));
}

#[wasm_bindgen(js_name = onChangeSort)]
pub fn on_change_sort(select: &HtmlSelectElement) {
    let (id, value) = (select.id(), select.value());
    with_controller(|c| c.on_change_sort(&id, &value));
}

#[wasm_bindgen(js_name = hideClass)]
pub fn hide_class(class: &str) {
    with_controller(|c| c.hide_class(class));
}

#[wasm_bindgen(js_name = showClass)]
pub fn show_class(class: &str) {
    with_controller(|c| c.show_class(class));
}

#[wasm_bindgen(js_name = onCheckDisplay)]
pub fn on_check_display(checkbox: &HtmlInputElement, class_to_show: &str, class_to_hide: Option<String>) {
    let checked = checkbox.checked();
    with_controller(|c| c.on_check_display(checked, class_to_show, class_to_hide.as_deref()));
}

#[wasm_bindgen(js_name = onToggleNavbarMenu)]
pub fn on_toggle_navbar_menu() {
    with_controller(|c| c.toggle_navbar_menu());
}

#[wasm_bindgen(js_name = onShowMapExplain)]
pub fn on_show_map_explain(id: &str) {
    with_controller(|c| c.show_map_explain(id));
}

#[wasm_bindgen(js_name = scaleUpMap)]
pub fn scale_up_map() {
    with_controller(|c| c.scale_up_map());
}

#[wasm_bindgen(js_name = scaleDownMap)]
pub fn scale_down_map() {
    with_controller(|c| c.scale_down_map());
}

#[wasm_bindgen(js_name = switchMapLayer)]
pub fn switch_map_layer() {
    with_controller(|c| c.switch_map_layer());
}

#[wasm_bindgen(js_name = changeMapFilter)]
pub fn change_map_filter(filter: &str) {
    with_controller(|c| c.change_map_filter(filter));
}
