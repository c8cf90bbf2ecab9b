use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::services::UserEndpoint;
use crate::viewmodels::bookings_viewmodel::{LOADING_BOOKINGS, NO_BOOKINGS};
use crate::viewmodels::{BookingsScreen, BookingsViewModel};

/// Renderizar la lista de reservas (fallo y lista vacía se ven igual)
pub fn render_bookings<E: UserEndpoint>(vm: &BookingsViewModel<E>) -> Result<Element, JsValue> {
    match vm.screen() {
        BookingsScreen::Loading => Ok(ElementBuilder::new("div")?
            .class("bookings-loading")
            .text(LOADING_BOOKINGS)
            .build()),
        BookingsScreen::Empty => Ok(ElementBuilder::new("div")?
            .class("bookings-empty")
            .text(NO_BOOKINGS)
            .build()),
        BookingsScreen::List { title, lines } => {
            let mut items = Vec::with_capacity(lines.len());
            for line in &lines {
                items.push(ElementBuilder::new("li")?.text(line).build());
            }
            Ok(ElementBuilder::new("div")?
                .class("bookings-view")
                .child(ElementBuilder::new("h2")?.text(&title).build())?
                .child(ElementBuilder::new("ul")?.children(items)?.build())?
                .build())
        }
    }
}
