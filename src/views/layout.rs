// ============================================================================
// LAYOUT VIEW - Cabecera + menú + contenido de la ruta
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::routing::{HistoryNavigator, Navigator, Route};

/// Envolver el contenido de la vista actual con la cabecera y el menú
pub fn render_layout(current: &Route, content: Element) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?
        .class("app-header")
        .child(ElementBuilder::new("h1")?.text("Renting Car").build())?
        .child(render_menu(current)?)?
        .build();

    let main = ElementBuilder::new("main")?
        .class("app-content")
        .child(content)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("app-layout")
        .child(header)?
        .child(main)?
        .build())
}

fn render_menu(current: &Route) -> Result<Element, JsValue> {
    let mut links = Vec::new();
    for route in Route::menu() {
        let class = if &route == current {
            "menu-link menu-link--active"
        } else {
            "menu-link"
        };
        let link = ElementBuilder::new("a")?
            .class(class)
            .attr("href", &route.path())?
            .text(route.title())
            .build();

        on_click(&link, move |e| {
            e.prevent_default();
            HistoryNavigator.navigate(&route, None);
        })?;
        links.push(link);
    }

    Ok(ElementBuilder::new("nav")?
        .class("app-menu")
        .children(links)?
        .build())
}

/// Ruta desconocida
pub fn render_not_found() -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("not-found")
        .text("Page not found.")
        .build())
}
