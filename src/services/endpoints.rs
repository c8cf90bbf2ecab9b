// ============================================================================
// ENDPOINTS - Contratos de los servicios remotos
// ============================================================================
// Un trait por grupo de endpoints para poder sustituirlos en los tests.
// Las listas `null` llegan ya convertidas en listas vacías.
// ============================================================================

#![allow(async_fn_in_trait)]

use crate::models::{Booking, Car, Delegation};
use crate::services::ApiError;

/// `CarEndpoint`
pub trait CarEndpoint {
    async fn save_car(&self, car: &Car) -> Result<(), ApiError>;
}

/// `UserEndpoint` (reservas del usuario)
pub trait UserEndpoint {
    async fn get_bookings_for_user(&self, user_id: &str) -> Result<Vec<Booking>, ApiError>;

    async fn save_booking(&self, booking: &Booking) -> Result<(), ApiError>;
}

/// `DelegationEndpoint`
pub trait DelegationEndpoint {
    async fn get_all_profile_delegations(&self) -> Result<Vec<Delegation>, ApiError>;
}
