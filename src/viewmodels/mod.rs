// ============================================================================
// VIEWMODELS - Estado + lógica de cada vista (sin DOM)
// ============================================================================

pub mod car_list_viewmodel;
pub mod bookings_viewmodel;
pub mod booking_car_viewmodel;

pub use car_list_viewmodel::CarListViewModel;
pub use bookings_viewmodel::{BookingsScreen, BookingsViewModel};
pub use booking_car_viewmodel::{BookingCarPhase, BookingCarViewModel, BookingSession, SubmitOutcome};
