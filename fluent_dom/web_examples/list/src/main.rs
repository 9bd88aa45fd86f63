// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Builds a few elements imperatively and declaratively and renders them into the body.

use fluent_dom::{ElementParams, web};
use wasm_bindgen::{JsCast, JsValue};

fn build() -> Result<(), JsValue> {
    let greeting = web::element("div")?;
    greeting
        .set_attribute("id", "test")?
        .add_class(["test", "test2"])?
        .add_children([web::element("p")?.set_inner_text("Hallo")])?;
    greeting.render()?;

    let clicks = std::cell::Cell::new(0_u32);
    let button = web::element(ElementParams::new("button").id("hello"))?;
    button
        .set_value("Test2")?
        .set_inner_text("Test2")
        .set_style([("color", "red")])?
        .add_event_listener("click", move |event| {
            clicks.set(clicks.get() + 1);
            if let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() {
                tracing::info!(clicks = clicks.get(), x = event.client_x(), "button clicked");
            }
        })?;
    button.render()?;

    let list = web::element(
        ElementParams::new("ul")
            .id("List")
            .style("padding", "2rem")
            .child(ElementParams::new("li").inner_text("Hello"))
            .child(ElementParams::new("li").inner_text("sweet"))
            .inner_text("Test")
            .child_after(ElementParams::new("li").inner_text("World")),
    )?;
    tracing::debug!(html = %list.inner_html(), "built list");
    list.render()
}

pub fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    if let Err(err) = build() {
        tracing::error!("couldn't build the page: {err:?}");
    }
}
