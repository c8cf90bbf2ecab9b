// ============================================================================
// MODELS - Registros compartidos con los endpoints remotos
// ============================================================================

pub mod car;
pub mod delegation;
pub mod booking;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

pub use car::Car;
pub use delegation::Delegation;
pub use booking::{Booking, BookingLifecycle, BookingStatus, PaymentStatus};

/// Error de validación en la frontera donde entran datos externos
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("{record}: required field `{field}` is missing or empty")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },
}

/// Comprobación de campos obligatorios (no vacíos)
pub trait Validate {
    fn validate(&self) -> Result<(), ModelError>;
}

/// Helper: falla si el campo está vacío (solo espacios cuenta como vacío)
pub(crate) fn require(
    record: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::MissingField { record, field });
    }
    Ok(())
}

/// `null` en un campo no obligatorio: valor por defecto
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` en un campo de texto: cadena vacía (los estados la muestran tal cual)
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    Ok(T::from(Option::<String>::deserialize(deserializer)?.unwrap_or_default()))
}

/// Decodificar registro a registro una lista ya parseada
///
/// Un registro que no decodifica o no valida se descarta con un warning;
/// el resto de la lista se conserva.
pub fn decode_records<T>(values: Vec<serde_json::Value>) -> Vec<T>
where
    T: DeserializeOwned + Validate,
{
    let total = values.len();
    let decoded: Vec<T> = values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("⚠️ [MODELS] Registro descartado: {}", e);
                None
            }
        })
        .collect();

    if decoded.len() < total {
        log::warn!("⚠️ [MODELS] {} de {} registros no decodificados", total - decoded.len(), total);
    }
    retain_valid(decoded)
}

/// Quedarse solo con los registros válidos de una lista recibida
///
/// Los registros inválidos se descartan con un warning en el log.
pub fn retain_valid<T: Validate>(records: Vec<T>) -> Vec<T> {
    let total = records.len();
    let valid: Vec<T> = records
        .into_iter()
        .filter(|record| match record.validate() {
            Ok(()) => true,
            Err(e) => {
                log::warn!("⚠️ [MODELS] Registro descartado: {}", e);
                false
            }
        })
        .collect();

    if valid.len() < total {
        log::warn!("⚠️ [MODELS] {} de {} registros descartados", total - valid.len(), total);
    }
    valid
}
