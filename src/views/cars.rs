// ============================================================================
// CARS VIEW - Tarjeta del coche de ejemplo
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::services::CarEndpoint;
use crate::state::ScopeHandle;
use crate::viewmodels::CarListViewModel;

pub fn render_cars<E>(vm: &CarListViewModel<E>, scope: &ScopeHandle) -> Result<Element, JsValue>
where
    E: CarEndpoint + Clone + 'static,
{
    let car_card = ElementBuilder::new("pre")?
        .class("car-json")
        .text(&vm.car_json())
        .build();

    let save_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "button")?
        .flag("disabled", vm.is_saving())?
        .text("Save Car")
        .build();
    {
        let vm = vm.clone();
        let scope = scope.clone();
        on_click(&save_btn, move |_| {
            let vm = vm.clone();
            scope.spawn(async move { vm.save_car().await });
        })?;
    }

    let book_btn = ElementBuilder::new("button")?
        .class("btn")
        .attr("type", "button")?
        .text("Book this car")
        .build();
    {
        let vm = vm.clone();
        on_click(&book_btn, move |_| vm.book_car())?;
    }

    let card = ElementBuilder::new("div")?
        .class("card")
        .child(car_card)?
        .child(save_btn)?
        .child(book_btn)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("cars-view")
        .child(ElementBuilder::new("h2")?.text("Car Management").build())?
        .child(card)?
        .build())
}
