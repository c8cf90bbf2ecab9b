// ============================================================================
// BOOKINGS VIEWMODEL - Reservas del usuario actual
// ============================================================================
// Internamente: Loading / Loaded(vacío) / Loaded(lista) / Failed.
// La pantalla junta "vacío" y "fallo" en el mismo "No bookings found.".
// ============================================================================

use crate::models::Booking;
use crate::services::UserEndpoint;
use crate::state::{FetchState, ReactiveState};

pub const LOADING_BOOKINGS: &str = "Loading bookings...";
pub const NO_BOOKINGS: &str = "No bookings found.";

/// Lo que se pinta
#[derive(Clone, Debug, PartialEq)]
pub enum BookingsScreen {
    Loading,
    Empty,
    List { title: String, lines: Vec<String> },
}

impl BookingsScreen {
    pub fn from_state(state: &FetchState<Vec<Booking>>, user_id: &str) -> Self {
        match state {
            FetchState::Loading => BookingsScreen::Loading,
            FetchState::Failed(_) => BookingsScreen::Empty,
            FetchState::Loaded(bookings) if bookings.is_empty() => BookingsScreen::Empty,
            FetchState::Loaded(bookings) => BookingsScreen::List {
                title: format!("Bookings for {}", user_id),
                lines: bookings.iter().map(Booking::summary).collect(),
            },
        }
    }
}

#[derive(Clone)]
pub struct BookingsViewModel<E> {
    endpoints: E,
    user_id: String,
    bookings: ReactiveState<FetchState<Vec<Booking>>>,
}

impl<E: UserEndpoint> BookingsViewModel<E> {
    pub fn new(endpoints: E, user_id: impl Into<String>) -> Self {
        Self {
            endpoints,
            user_id: user_id.into(),
            bookings: ReactiveState::new(FetchState::Loading),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn state(&self) -> FetchState<Vec<Booking>> {
        self.bookings.get()
    }

    pub fn screen(&self) -> BookingsScreen {
        self.bookings
            .with(|state| BookingsScreen::from_state(state, &self.user_id))
    }

    pub fn subscribe<F: Fn() + 'static>(&self, callback: F) {
        self.bookings.subscribe(callback);
    }

    /// Pedir las reservas (al montar la vista)
    pub async fn load(&self) {
        self.bookings.set(FetchState::Loading);
        let result = self.endpoints.get_bookings_for_user(&self.user_id).await;
        if let Err(e) = &result {
            log::error!("❌ [BOOKINGS] Failed to fetch bookings: {}", e);
        }
        self.bookings.set(result.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Car, Delegation};
    use crate::services::ApiClient;
    use crate::test_support::*;
    use chrono::NaiveDate;
    use futures::executor::block_on;

    fn booking(start: &str, end: &str) -> Booking {
        Booking::pending(
            "USER#001",
            "booking#2025#005",
            Car::sample(),
            NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
            NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap(),
            Delegation::new("DEL#01", "Madrid"),
            Delegation::new("DEL#02", "Sevilla"),
        )
    }

    #[test]
    fn starts_in_loading_screen() {
        let vm = BookingsViewModel::new(MockEndpoints::new(), "USER#001");
        assert_eq!(vm.screen(), BookingsScreen::Loading);
    }

    #[test]
    fn empty_result_renders_no_bookings() {
        capture_logs();
        let endpoints = MockEndpoints::new().with_bookings(Ok(Vec::new()));
        let vm = BookingsViewModel::new(endpoints.clone(), "USER#001");

        block_on(vm.load());

        assert_eq!(vm.state(), FetchState::Loaded(Vec::new()));
        assert_eq!(vm.screen(), BookingsScreen::Empty);
        assert_eq!(endpoints.calls(), vec!["getBookingsForUser"]);
        assert!(logged_errors().is_empty());
    }

    #[test]
    fn null_result_collapses_into_the_same_empty_screen() {
        // `null` llega como lista vacía desde el cliente HTTP
        let bookings = crate::services::api_client::decode_list::<Booking>("null").unwrap();
        let endpoints = MockEndpoints::new().with_bookings(Ok(bookings));
        let vm = BookingsViewModel::new(endpoints, "USER#001");

        block_on(vm.load());

        assert_eq!(vm.state(), FetchState::Loaded(Vec::new()));
        assert_eq!(vm.screen(), BookingsScreen::Empty);
    }

    #[test]
    fn failed_fetch_also_renders_no_bookings_and_logs_once() {
        capture_logs();
        let endpoints = MockEndpoints::new().with_bookings(Err(network_down()));
        let vm = BookingsViewModel::new(endpoints, "USER#001");

        block_on(vm.load());

        assert!(vm.state().is_failed());
        assert_eq!(vm.screen(), BookingsScreen::Empty);
        assert_eq!(logged_errors().len(), 1);
    }

    #[test]
    fn populated_result_lists_each_booking() {
        let endpoints = MockEndpoints::new().with_bookings(Ok(vec![
            booking("2025-01-02", "2025-01-05"),
            booking("2025-02-10", "2025-02-12"),
        ]));
        let vm = BookingsViewModel::new(endpoints, "USER#001");

        block_on(vm.load());

        assert_eq!(
            vm.screen(),
            BookingsScreen::List {
                title: "Bookings for USER#001".to_string(),
                lines: vec![
                    "Toyota Camry (2025-01-02 → 2025-01-05) - PENDING".to_string(),
                    "Toyota Camry (2025-02-10 → 2025-02-12) - PENDING".to_string(),
                ],
            }
        );
    }

    #[test]
    fn user_is_threaded_from_the_caller() {
        let vm = BookingsViewModel::new(ApiClient::with_base_url("http://x"), "USER#042");
        assert_eq!(vm.user_id(), "USER#042");
    }
}
