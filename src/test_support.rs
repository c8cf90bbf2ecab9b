// ============================================================================
// TEST SUPPORT - Dobles de endpoints, avisos, navegación y log
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use crate::models::{Booking, Car, Delegation};
use crate::routing::{NavigationState, Navigator, Route};
use crate::services::{ApiError, CarEndpoint, DelegationEndpoint, Notifier, UserEndpoint};

// ----------------------------------------------------------------------------
// Endpoints con respuestas programadas
// ----------------------------------------------------------------------------

struct Script {
    bookings: Result<Vec<Booking>, ApiError>,
    delegations: Result<Vec<Delegation>, ApiError>,
    save_car: Result<(), ApiError>,
    save_booking: Result<(), ApiError>,
    calls: Vec<&'static str>,
    saved_cars: Vec<Car>,
    saved_bookings: Vec<Booking>,
}

#[derive(Clone)]
pub struct MockEndpoints {
    script: Rc<RefCell<Script>>,
}

impl MockEndpoints {
    pub fn new() -> Self {
        Self {
            script: Rc::new(RefCell::new(Script {
                bookings: Ok(Vec::new()),
                delegations: Ok(Vec::new()),
                save_car: Ok(()),
                save_booking: Ok(()),
                calls: Vec::new(),
                saved_cars: Vec::new(),
                saved_bookings: Vec::new(),
            })),
        }
    }

    pub fn with_bookings(self, result: Result<Vec<Booking>, ApiError>) -> Self {
        self.script.borrow_mut().bookings = result;
        self
    }

    pub fn with_delegations(self, result: Result<Vec<Delegation>, ApiError>) -> Self {
        self.script.borrow_mut().delegations = result;
        self
    }

    pub fn with_save_car(self, result: Result<(), ApiError>) -> Self {
        self.script.borrow_mut().save_car = result;
        self
    }

    pub fn with_save_booking(self, result: Result<(), ApiError>) -> Self {
        self.set_save_booking(result);
        self
    }

    /// Cambiar la respuesta de `saveBooking` a mitad de un test
    pub fn set_save_booking(&self, result: Result<(), ApiError>) {
        self.script.borrow_mut().save_booking = result;
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.script.borrow().calls.clone()
    }

    pub fn saved_cars(&self) -> Vec<Car> {
        self.script.borrow().saved_cars.clone()
    }

    pub fn saved_bookings(&self) -> Vec<Booking> {
        self.script.borrow().saved_bookings.clone()
    }
}

impl CarEndpoint for MockEndpoints {
    async fn save_car(&self, car: &Car) -> Result<(), ApiError> {
        let mut script = self.script.borrow_mut();
        script.calls.push("saveCar");
        script.saved_cars.push(car.clone());
        script.save_car.clone()
    }
}

impl UserEndpoint for MockEndpoints {
    async fn get_bookings_for_user(&self, _user_id: &str) -> Result<Vec<Booking>, ApiError> {
        let mut script = self.script.borrow_mut();
        script.calls.push("getBookingsForUser");
        script.bookings.clone()
    }

    async fn save_booking(&self, booking: &Booking) -> Result<(), ApiError> {
        let mut script = self.script.borrow_mut();
        script.calls.push("saveBooking");
        script.saved_bookings.push(booking.clone());
        script.save_booking.clone()
    }
}

impl DelegationEndpoint for MockEndpoints {
    async fn get_all_profile_delegations(&self) -> Result<Vec<Delegation>, ApiError> {
        let mut script = self.script.borrow_mut();
        script.calls.push("getAllProfileDelegations");
        script.delegations.clone()
    }
}

pub fn network_down() -> ApiError {
    ApiError::Network("connection refused".to_string())
}

// ----------------------------------------------------------------------------
// Avisos y navegación grabados
// ----------------------------------------------------------------------------

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    alerts: Rc<RefCell<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visits: Rc<RefCell<Vec<(Route, Option<NavigationState>)>>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<(Route, Option<NavigationState>)> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route, state: Option<&NavigationState>) {
        self.visits
            .borrow_mut()
            .push((route.clone(), state.cloned()));
    }
}

// ----------------------------------------------------------------------------
// Log capturado por hilo (cada test corre en su hilo)
// ----------------------------------------------------------------------------

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = RefCell::new(Vec::new());
}

struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Instalar el logger de captura y vaciar lo grabado en este hilo
pub fn capture_logs() {
    INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

pub fn logged_errors() -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(level, _)| *level == log::Level::Error)
            .map(|(_, message)| message.clone())
            .collect()
    })
}
