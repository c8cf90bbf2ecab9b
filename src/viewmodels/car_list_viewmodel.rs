// ============================================================================
// CAR LIST VIEWMODEL - Guardar el coche de ejemplo / empezar una reserva
// ============================================================================

use std::rc::Rc;

use crate::models::Car;
use crate::routing::{NavigationState, Navigator, Route};
use crate::services::{CarEndpoint, Notifier};
use crate::state::ReactiveState;

pub const CAR_SAVED: &str = "Car saved successfully!";
pub const CAR_SAVE_FAILED: &str = "Failed to save car";

#[derive(Clone)]
pub struct CarListViewModel<E> {
    endpoints: E,
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
    car: Car,
    saving: ReactiveState<bool>,
}

impl<E: CarEndpoint> CarListViewModel<E> {
    pub fn new(endpoints: E, notifier: Rc<dyn Notifier>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            endpoints,
            notifier,
            navigator,
            car: Car::sample(),
            saving: ReactiveState::new(false),
        }
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    /// JSON indentado que se muestra en la tarjeta
    pub fn car_json(&self) -> String {
        serde_json::to_string_pretty(&self.car).unwrap_or_default()
    }

    pub fn is_saving(&self) -> bool {
        self.saving.get()
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        self.saving.subscribe(callback);
    }

    /// Enviar el coche a `saveCar`; sin reintentos ni validación
    pub async fn save_car(&self) {
        self.saving.set(true);
        match self.endpoints.save_car(&self.car).await {
            Ok(()) => {
                log::info!("✅ [CARS] Coche {} guardado", self.car.id);
                self.notifier.alert(CAR_SAVED);
            }
            Err(e) => {
                log::error!("❌ [CARS] Error saving car: {}", e);
                self.notifier.alert(CAR_SAVE_FAILED);
            }
        }
        self.saving.set(false);
    }

    /// Ir a la creación de reserva con el coche como estado de navegación
    pub fn book_car(&self) {
        let route = Route::new_booking();
        let state = NavigationState {
            car: self.car.clone(),
        };
        self.navigator.navigate(&route, Some(&state));
    }
}
