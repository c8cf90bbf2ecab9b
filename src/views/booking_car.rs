// ============================================================================
// BOOKING CAR VIEW - Formulario "Complete Booking"
// ============================================================================
// Los valores del formulario salen siempre del viewmodel, así que un
// re-render (o un envío fallido) no pierde lo que el usuario eligió.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{event_value, on_change, on_click, ElementBuilder};
use crate::models::Delegation;
use crate::services::{DelegationEndpoint, UserEndpoint};
use crate::state::ScopeHandle;
use crate::utils::{parse_input_date, to_input_value};
use crate::viewmodels::booking_car_viewmodel::MISSING_CAR_MESSAGE;
use crate::viewmodels::{BookingCarPhase, BookingCarViewModel};

pub fn render_booking_car<E>(
    vm: &BookingCarViewModel<E>,
    scope: &ScopeHandle,
) -> Result<Element, JsValue>
where
    E: UserEndpoint + DelegationEndpoint + Clone + 'static,
{
    match vm.phase() {
        BookingCarPhase::MissingCar => Ok(ElementBuilder::new("div")?
            .class("booking-error")
            .text(MISSING_CAR_MESSAGE)
            .build()),
        BookingCarPhase::LoadingDelegations => Ok(ElementBuilder::new("div")?
            .class("booking-loading")
            .text("Loading...")
            .build()),
        phase => render_form(vm, scope, phase == BookingCarPhase::Submitting),
    }
}

fn render_form<E>(
    vm: &BookingCarViewModel<E>,
    scope: &ScopeHandle,
    submitting: bool,
) -> Result<Element, JsValue>
where
    E: UserEndpoint + DelegationEndpoint + Clone + 'static,
{
    let form = vm.form();
    let delegations = vm.delegations();

    // Fechas
    let start_input = date_input(
        "start-date",
        &to_input_value(form.start_date),
        &to_input_value(Some(vm.min_start_date())),
    )?;
    {
        let vm = vm.clone();
        on_change(&start_input, move |e| {
            let value = event_value(&e).unwrap_or_default();
            vm.set_start_date(parse_input_date(&value));
        })?;
    }

    let end_input = date_input(
        "end-date",
        &to_input_value(form.end_date),
        &to_input_value(Some(vm.min_end_date())),
    )?;
    {
        let vm = vm.clone();
        on_change(&end_input, move |e| {
            let value = event_value(&e).unwrap_or_default();
            vm.set_end_date(parse_input_date(&value));
        })?;
    }

    // Delegaciones
    let pick_up_select = delegation_select(
        "pick-up",
        &delegations,
        form.pick_up.as_ref().map(|d| d.id.as_str()),
    )?;
    {
        let vm = vm.clone();
        on_change(&pick_up_select, move |e| {
            vm.select_pick_up(&event_value(&e).unwrap_or_default());
        })?;
    }

    let deliver_select = delegation_select(
        "deliver",
        &delegations,
        form.deliver.as_ref().map(|d| d.id.as_str()),
    )?;
    {
        let vm = vm.clone();
        on_change(&deliver_select, move |e| {
            vm.select_deliver(&event_value(&e).unwrap_or_default());
        })?;
    }

    let submit_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "button")?
        .flag("disabled", submitting)?
        .text(if submitting { "Booking..." } else { "Confirm Booking" })
        .build();
    {
        let vm = vm.clone();
        let scope = scope.clone();
        on_click(&submit_btn, move |_| {
            let vm = vm.clone();
            scope.spawn(async move {
                let outcome = vm.submit().await;
                log::debug!("📝 [BOOKING] Resultado del envío: {:?}", outcome);
            });
        })?;
    }

    let title = format!("Booking ID: {}", vm.id_hash());
    let car_line = vm
        .car()
        .map(|car| format!("{} ({}, {})", car.display_name(), car.year, car.color))
        .unwrap_or_default();

    Ok(ElementBuilder::new("div")?
        .class("booking-car-view")
        .child(ElementBuilder::new("h2")?.text(&title).build())?
        .child(ElementBuilder::new("p")?.class("booking-car").text(&car_line).build())?
        .child(field("Start Date", start_input)?)?
        .child(field("End Date", end_input)?)?
        .child(field("Pickup Location", pick_up_select)?)?
        .child(field("Return Location", deliver_select)?)?
        .child(ElementBuilder::new("div")?.class("form-actions").child(submit_btn)?.build())?
        .build())
}

fn field(label: &str, control: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("label")?
        .class("form-field")
        .child(ElementBuilder::new("span")?.text(label).build())?
        .child(control)?
        .build())
}

fn date_input(name: &str, value: &str, min: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("input")?
        .attr("type", "date")?
        .attr("name", name)?
        .attr("value", value)?
        .attr("min", min)?
        .flag("required", true)?
        .build())
}

/// `<select>` con una opción vacía + una por delegación (etiqueta = nombre)
fn delegation_select(
    name: &str,
    delegations: &[Delegation],
    selected: Option<&str>,
) -> Result<Element, JsValue> {
    let mut options = vec![ElementBuilder::new("option")?
        .attr("value", "")?
        .flag("selected", selected.is_none())?
        .text("Select a location")
        .build()];

    for delegation in delegations {
        options.push(
            ElementBuilder::new("option")?
                .attr("value", &delegation.id)?
                .flag("selected", selected == Some(delegation.id.as_str()))?
                .text(&delegation.name)
                .build(),
        );
    }

    Ok(ElementBuilder::new("select")?
        .attr("name", name)?
        .children(options)?
        .build())
}
