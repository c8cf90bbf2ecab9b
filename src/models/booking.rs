use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{null_as_default, null_as_empty, require, Car, Delegation, ModelError, Validate};

/// Reserva: usuario + coche + rango de fechas + dos delegaciones
///
/// Al leer reservas del servidor el coche y las delegaciones pueden faltar.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub operation: String,
    #[serde(default)]
    pub car: Option<Car>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub pick_up_delegation: Option<Delegation>,
    #[serde(default)]
    pub deliver_delegation: Option<Delegation>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: BookingStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_to_payment: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status_payment: PaymentStatus,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status_booking: BookingLifecycle,
}

impl Booking {
    /// Reserva nueva tal y como se envía al crearla:
    /// PENDING / 0 / PENDING / CREATED
    pub fn pending(
        user_id: &str,
        operation: &str,
        car: Car,
        start_date: NaiveDate,
        end_date: NaiveDate,
        pick_up: Delegation,
        deliver: Delegation,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            operation: operation.to_string(),
            car: Some(car),
            start_date,
            end_date,
            pick_up_delegation: Some(pick_up),
            deliver_delegation: Some(deliver),
            status: BookingStatus::Pending,
            total_to_payment: 0.0,
            status_payment: PaymentStatus::Pending,
            status_booking: BookingLifecycle::Created,
        }
    }

    /// Línea de la lista de reservas: "Toyota Camry (2025-01-02 → 2025-01-05) - PENDING"
    pub fn summary(&self) -> String {
        let car = self
            .car
            .as_ref()
            .map(Car::display_name)
            .unwrap_or_default();
        format!(
            "{} ({} → {}) - {}",
            car, self.start_date, self.end_date, self.status
        )
    }
}

impl Validate for Booking {
    fn validate(&self) -> Result<(), ModelError> {
        require("Booking", "userId", &self.user_id)
    }
}

// Estados: valores conocidos + cualquier otro valor del servidor tal cual

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(from = "String", into = "String")]
pub enum BookingStatus {
    #[default]
    Pending,
    Other(String),
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Other(String),
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
#[serde(from = "String", into = "String")]
pub enum BookingLifecycle {
    #[default]
    Created,
    Other(String),
}

impl From<String> for BookingStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDING" => Self::Pending,
            _ => Self::Other(value),
        }
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Pending => "PENDING".to_string(),
            BookingStatus::Other(value) => value,
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDING" => Self::Pending,
            _ => Self::Other(value),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Pending => "PENDING".to_string(),
            PaymentStatus::Other(value) => value,
        }
    }
}

impl From<String> for BookingLifecycle {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CREATED" => Self::Created,
            _ => Self::Other(value),
        }
    }
}

impl From<BookingLifecycle> for String {
    fn from(status: BookingLifecycle) -> Self {
        match status {
            BookingLifecycle::Created => "CREATED".to_string(),
            BookingLifecycle::Other(value) => value,
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "PENDING"),
            BookingStatus::Other(value) => write!(f, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn pending_booking_uses_wire_field_names_and_fixed_statuses() {
        let booking = Booking::pending(
            "USER#001",
            "booking#2025#005",
            Car::sample(),
            date("2025-03-01"),
            date("2025-03-04"),
            Delegation::new("DEL#01", "Madrid"),
            Delegation::new("DEL#02", "Sevilla"),
        );
        let json = serde_json::to_value(&booking).unwrap();

        assert_eq!(json["userId"], "USER#001");
        assert_eq!(json["operation"], "booking#2025#005");
        assert_eq!(json["startDate"], "2025-03-01");
        assert_eq!(json["endDate"], "2025-03-04");
        assert_eq!(json["pickUpDelegation"]["id"], "DEL#01");
        assert_eq!(json["deliverDelegation"]["id"], "DEL#02");
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["totalToPayment"], 0.0);
        assert_eq!(json["statusPayment"], "PENDING");
        assert_eq!(json["statusBooking"], "CREATED");
    }

    #[test]
    fn unknown_server_status_is_kept_verbatim() {
        let json = r#"{
            "userId": "USER#001",
            "startDate": "2025-03-01",
            "endDate": "2025-03-02",
            "status": "CONFIRMED",
            "statusBooking": "CLOSED"
        }"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.status, BookingStatus::Other("CONFIRMED".to_string()));
        assert_eq!(booking.status_booking, BookingLifecycle::Other("CLOSED".to_string()));
        assert_eq!(booking.status_payment, PaymentStatus::Pending);
        assert!(booking.car.is_none());
    }

    #[test]
    fn summary_renders_car_dates_and_status() {
        let mut booking = Booking::pending(
            "USER#001",
            "op",
            Car::sample(),
            date("2025-01-02"),
            date("2025-01-05"),
            Delegation::new("A", "A"),
            Delegation::new("B", "B"),
        );
        assert_eq!(
            booking.summary(),
            "Toyota Camry (2025-01-02 → 2025-01-05) - PENDING"
        );

        booking.car = None;
        assert_eq!(booking.summary(), " (2025-01-02 → 2025-01-05) - PENDING");
    }
}
