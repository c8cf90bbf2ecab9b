// ============================================================================
// ROUTING - Rutas del cliente + estado de navegación (History API)
// ============================================================================
// El estado de navegación ({ car }) viaja fuera de la URL, en history.state.
// ============================================================================

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::models::Car;

const BOOKING_CAR_PREFIX: &str = "/listCars/bookingCar/";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Cars,
    Bookings,
    /// `idHashBookingCar` solo se muestra, no se usa para buscar el coche
    BookingCar { id_hash: String },
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/cars" => Route::Cars,
            "/bookings" => Route::Bookings,
            _ => match trimmed.strip_prefix(BOOKING_CAR_PREFIX) {
                Some(id_hash) if !id_hash.is_empty() && !id_hash.contains('/') => {
                    Route::BookingCar {
                        id_hash: id_hash.to_string(),
                    }
                }
                _ => Route::NotFound(path.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Cars => "/cars".to_string(),
            Route::Bookings => "/bookings".to_string(),
            Route::BookingCar { id_hash } => format!("{}{}", BOOKING_CAR_PREFIX, id_hash),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Cars => "Cars",
            Route::Bookings => "Bookings",
            Route::BookingCar { .. } => "Complete Booking",
            Route::NotFound(_) => "Not Found",
        }
    }

    /// Entradas del menú, ordenadas (la creación de reservas no aparece)
    pub fn menu() -> Vec<Route> {
        vec![Route::Cars, Route::Bookings]
    }

    /// Ruta de reserva nueva con un hash aleatorio
    pub fn new_booking() -> Self {
        Route::BookingCar {
            id_hash: uuid::Uuid::new_v4().simple().to_string(),
        }
    }
}

/// Payload fuera de banda de una transición de ruta
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    pub car: Car,
}

impl NavigationState {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// `None` si no hay estado o no es un `{ car }` válido
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(state) => Some(state),
            Err(e) => {
                log::warn!("⚠️ [ROUTER] Estado de navegación ignorado: {}", e);
                None
            }
        }
    }
}

pub trait Navigator {
    fn navigate(&self, route: &Route, state: Option<&NavigationState>);
}

/// Navegación con `history.pushState` + re-render programado
#[derive(Clone, Copy, Default)]
pub struct HistoryNavigator;

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: &Route, state: Option<&NavigationState>) {
        if let Err(e) = push_route(route, state) {
            log::error!("❌ [ROUTER] Error navegando a {}: {:?}", route.path(), e);
            return;
        }
        log::info!("🧭 [ROUTER] Navegando a {}", route.path());
        crate::schedule_rerender();
    }
}

fn push_route(route: &Route, state: Option<&NavigationState>) -> Result<(), JsValue> {
    let history = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .history()?;
    let data = match state {
        Some(state) => JsValue::from_str(
            &state
                .to_json()
                .map_err(|e| JsValue::from_str(&e.to_string()))?,
        ),
        None => JsValue::NULL,
    };
    history.push_state_with_url(&data, "", Some(route.path().as_str()))
}

/// Ruta y estado de navegación actuales del navegador
pub fn current_location() -> (Route, Option<NavigationState>) {
    let Some(win) = web_sys::window() else {
        return (Route::Cars, None);
    };
    let path = win.location().pathname().unwrap_or_else(|_| "/".to_string());
    let state = win
        .history()
        .ok()
        .and_then(|history| history.state().ok())
        .and_then(|data| data.as_string())
        .and_then(|raw| NavigationState::from_json(&raw));
    (Route::parse(&path), state)
}
