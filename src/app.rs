// ============================================================================
// APP - Aplicación principal: monta la vista de la ruta actual y la pinta
// ============================================================================
// Cada cambio de ruta desmonta la vista anterior (su MountScope aborta las
// peticiones en curso) y monta la nueva con estado limpio.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, set_document_title, set_inner_html};
use crate::routing::{current_location, HistoryNavigator, NavigationState, Route};
use crate::services::{ApiClient, WindowNotifier};
use crate::state::MountScope;
use crate::viewmodels::{BookingCarViewModel, BookingSession, BookingsViewModel, CarListViewModel};
use crate::views::{render_booking_car, render_bookings, render_cars, render_layout, render_not_found};

/// Vista montada para la ruta actual
enum ActiveView {
    Cars(CarListViewModel<ApiClient>),
    Bookings(BookingsViewModel<ApiClient>),
    BookingCar(BookingCarViewModel<ApiClient>),
    NotFound,
}

struct MountedView {
    route: Route,
    view: ActiveView,
    scope: MountScope,
}

/// Aplicación principal
pub struct App {
    root: Element,
    api: ApiClient,
    mounted: Option<MountedView>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        Ok(Self {
            root,
            api: ApiClient::new(),
            mounted: None,
        })
    }

    /// Renderizar la ruta actual (montando la vista si cambió)
    pub fn render(&mut self) -> Result<(), JsValue> {
        let (route, navigation_state) = current_location();

        let needs_mount = self
            .mounted
            .as_ref()
            .map_or(true, |mounted| mounted.route != route);
        if needs_mount {
            self.mount(route, navigation_state);
        }

        let Some(mounted) = &self.mounted else {
            return Ok(());
        };

        let handle = mounted.scope.handle();
        let content = match &mounted.view {
            ActiveView::Cars(vm) => render_cars(vm, &handle)?,
            ActiveView::Bookings(vm) => render_bookings(vm)?,
            ActiveView::BookingCar(vm) => render_booking_car(vm, &handle)?,
            ActiveView::NotFound => render_not_found()?,
        };

        set_inner_html(&self.root, "");
        append_child(&self.root, &render_layout(&mounted.route, content)?)?;
        set_document_title(mounted.route.title());
        Ok(())
    }

    fn mount(&mut self, route: Route, navigation_state: Option<NavigationState>) {
        // Soltar la vista anterior antes de montar la nueva
        self.mounted = None;
        log::info!("🎬 [APP] Montando {}", route.path());

        let scope = MountScope::new(route.title());
        let view = match &route {
            Route::Cars => {
                let vm = CarListViewModel::new(
                    self.api.clone(),
                    Rc::new(WindowNotifier),
                    Rc::new(HistoryNavigator),
                );
                vm.subscribe(crate::schedule_rerender);
                ActiveView::Cars(vm)
            }
            Route::Bookings => {
                let vm = BookingsViewModel::new(self.api.clone(), CONFIG.current_user_id.clone());
                vm.subscribe(crate::schedule_rerender);
                let loader = vm.clone();
                scope.spawn(async move { loader.load().await });
                ActiveView::Bookings(vm)
            }
            Route::BookingCar { id_hash } => {
                let vm = BookingCarViewModel::new(
                    self.api.clone(),
                    Rc::new(WindowNotifier),
                    Rc::new(HistoryNavigator),
                    BookingSession {
                        user_id: CONFIG.current_user_id.clone(),
                        operation: CONFIG.booking_operation.clone(),
                    },
                    id_hash.clone(),
                    navigation_state,
                );
                vm.subscribe(crate::schedule_rerender);
                if vm.car().is_some() {
                    let loader = vm.clone();
                    scope.spawn(async move { loader.load_delegations().await });
                } else {
                    log::warn!("⚠️ [APP] {} sin coche en el estado de navegación", route.path());
                }
                ActiveView::BookingCar(vm)
            }
            Route::NotFound(path) => {
                log::warn!("⚠️ [APP] Ruta desconocida: {}", path);
                ActiveView::NotFound
            }
        };

        self.mounted = Some(MountedView { route, view, scope });
    }
}
