pub mod layout;
pub mod cars;
pub mod bookings;
pub mod booking_car;

pub use layout::{render_layout, render_not_found};
pub use cars::render_cars;
pub use bookings::render_bookings;
pub use booking_car::render_booking_car;
