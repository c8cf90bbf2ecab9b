// ============================================================================
// BOOKING FORM - Estado local del formulario de reserva
// ============================================================================
// Solo se valida al enviar. El orden de las comprobaciones es fijo:
// fechas, coche, delegaciones.
// ============================================================================

use chrono::NaiveDate;

use crate::models::{Booking, Car, Delegation};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingForm {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub pick_up: Option<Delegation>,
    pub deliver: Option<Delegation>,
}

/// Motivo por el que no se envía la reserva (texto = aviso al usuario)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please select start and end dates")]
    MissingDates,
    #[error("Please select a start date")]
    MissingStartDate,
    #[error("Please select an end date")]
    MissingEndDate,
    #[error("Car data is missing.")]
    MissingCar,
    #[error("Please select pickup and delivery delegations")]
    MissingDelegations,
}

impl BookingForm {
    /// Validar y construir la reserva a enviar
    pub fn to_booking(
        &self,
        car: Option<&Car>,
        user_id: &str,
        operation: &str,
    ) -> Result<Booking, FormError> {
        let (start_date, end_date) = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => (start, end),
            (None, None) => return Err(FormError::MissingDates),
            (None, Some(_)) => return Err(FormError::MissingStartDate),
            (Some(_), None) => return Err(FormError::MissingEndDate),
        };

        let car = car.ok_or(FormError::MissingCar)?;

        let (pick_up, deliver) = match (&self.pick_up, &self.deliver) {
            (Some(pick_up), Some(deliver)) => (pick_up.clone(), deliver.clone()),
            _ => return Err(FormError::MissingDelegations),
        };

        Ok(Booking::pending(
            user_id,
            operation,
            car.clone(),
            start_date,
            end_date,
            pick_up,
            deliver,
        ))
    }
}
