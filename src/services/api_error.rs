// ============================================================================
// API ERROR - Fallos de las llamadas remotas
// ============================================================================
// Al usuario solo se le muestra un aviso genérico; el detalle va al log.
// ============================================================================

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Cuerpo de error que devuelven los endpoints (`{"type": ..., "message": ...}`)
#[derive(Deserialize)]
struct EndpointErrorBody {
    message: String,
}

impl ApiError {
    /// Construir el error de una respuesta no-2xx
    ///
    /// Usa el `message` del endpoint si el cuerpo es un documento de error,
    /// si no el status text de HTTP.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let message = serde_json::from_str::<EndpointErrorBody>(body)
            .map(|b| b.message)
            .unwrap_or_else(|_| status_text.to_string());
        ApiError::Http { status, message }
    }
}
