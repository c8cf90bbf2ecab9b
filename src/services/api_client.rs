// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Llamadas RPC a los endpoints: POST {base}/connect/{Endpoint}/{method}
// con un objeto JSON de parámetros con nombre.
// ============================================================================

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::models::{decode_records, Booking, Car, Delegation, Validate};
use crate::services::endpoints::{CarEndpoint, DelegationEndpoint, UserEndpoint};
use crate::services::ApiError;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.backend_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint_url(&self, endpoint: &str, method: &str) -> String {
        format!("{}/connect/{}/{}", self.base_url, endpoint, method)
    }

    /// Ejecutar una llamada y devolver el cuerpo de la respuesta
    async fn call<P: Serialize>(
        &self,
        endpoint: &str,
        method: &str,
        params: &P,
    ) -> Result<String, ApiError> {
        let url = self.endpoint_url(endpoint, method);
        log::debug!("🌐 [API] {}.{}", endpoint, method);

        let response = Request::post(&url)
            .header("Accept", "application/json")
            .json(params)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(ApiError::from_response(status, &status_text, &body));
        }
        Ok(body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

// Parámetros con nombre de cada método

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserIdParams<'a> {
    user_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveCarParams<'a> {
    car_json: &'a Car,
}

#[derive(Serialize)]
struct SaveBookingParams<'a> {
    booking: &'a Booking,
}

#[derive(Serialize)]
struct NoParams {}

/// Decodificar una respuesta `T[] | null`, descartando registros inválidos
pub(crate) fn decode_list<T>(body: &str) -> Result<Vec<T>, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let body = body.trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }
    let list: Option<Vec<serde_json::Value>> =
        serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(decode_records(list.unwrap_or_default()))
}

impl CarEndpoint for ApiClient {
    async fn save_car(&self, car: &Car) -> Result<(), ApiError> {
        log::info!("🚗 [API] Guardando coche {}", car.id);
        self.call("CarEndpoint", "saveCar", &SaveCarParams { car_json: car })
            .await
            .map(|_| ())
    }
}

impl UserEndpoint for ApiClient {
    async fn get_bookings_for_user(&self, user_id: &str) -> Result<Vec<Booking>, ApiError> {
        let body = self
            .call("UserEndpoint", "getBookingsForUser", &UserIdParams { user_id })
            .await?;
        let bookings = decode_list::<Booking>(&body)?;
        log::info!("✅ [API] {} reservas para {}", bookings.len(), user_id);
        Ok(bookings)
    }

    async fn save_booking(&self, booking: &Booking) -> Result<(), ApiError> {
        log::info!("📝 [API] Guardando reserva {}", booking.operation);
        self.call("UserEndpoint", "saveBooking", &SaveBookingParams { booking })
            .await
            .map(|_| ())
    }
}

impl DelegationEndpoint for ApiClient {
    async fn get_all_profile_delegations(&self) -> Result<Vec<Delegation>, ApiError> {
        let body = self
            .call("DelegationEndpoint", "getAllProfileDelegations", &NoParams {})
            .await?;
        let delegations = decode_list::<Delegation>(&body)?;
        log::info!("✅ [API] {} delegaciones", delegations.len());
        Ok(delegations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;

    #[test]
    fn endpoint_url_joins_base_endpoint_and_method() {
        let client = ApiClient::with_base_url("http://localhost:8080/");
        assert_eq!(
            client.endpoint_url("UserEndpoint", "getBookingsForUser"),
            "http://localhost:8080/connect/UserEndpoint/getBookingsForUser"
        );
    }

    #[test]
    fn null_and_empty_bodies_decode_to_empty_lists() {
        assert!(decode_list::<Booking>("null").unwrap().is_empty());
        assert!(decode_list::<Booking>("").unwrap().is_empty());
        assert!(decode_list::<Delegation>("[]").unwrap().is_empty());
    }

    #[test]
    fn invalid_records_are_dropped_at_the_boundary() {
        let body = r#"[
            {"id": "DEL#01", "name": "Madrid"},
            {"id": "DEL#02", "name": ""},
            {"id": "", "name": "Sevilla"}
        ]"#;
        let delegations = decode_list::<Delegation>(body).unwrap();
        assert_eq!(delegations, vec![Delegation::new("DEL#01", "Madrid")]);
    }

    #[test]
    fn delegation_with_null_name_does_not_sink_the_list() {
        let body = r#"[{"id":"DEL#01","name":"Madrid"},{"id":"DEL#02","name":null}]"#;
        let delegations = decode_list::<Delegation>(body).unwrap();
        assert_eq!(delegations, vec![Delegation::new("DEL#01", "Madrid")]);
    }

    #[test]
    fn bookings_with_null_statuses_are_kept() {
        let body = r#"[
            {"userId":"USER#001","operation":"op#1","car":{"id":"123","make":"Toyota","model":"Camry","year":2024,"color":"Blue"},"startDate":"2025-01-02","endDate":"2025-01-05","status":"CONFIRMED","totalToPayment":120.5,"statusPayment":"PAID","statusBooking":"CREATED"},
            {"userId":"USER#001","operation":null,"car":null,"startDate":"2025-02-01","endDate":"2025-02-03","status":null,"totalToPayment":null,"statusPayment":null,"statusBooking":null,"pickUpDelegation":null,"deliverDelegation":null}
        ]"#;
        let bookings = decode_list::<Booking>(body).unwrap();

        assert_eq!(bookings.len(), 2);
        assert_eq!(bookings[0].status, BookingStatus::Other("CONFIRMED".to_string()));
        assert_eq!(bookings[1].status, BookingStatus::Other(String::new()));
        assert_eq!(bookings[1].operation, "");
        assert_eq!(bookings[1].total_to_payment, 0.0);
        assert_eq!(bookings[1].car, None);
    }

    #[test]
    fn booking_without_dates_is_dropped_alone() {
        let body = r#"[
            {"userId":"USER#001","startDate":"2025-01-02","endDate":"2025-01-05"},
            {"userId":"USER#001","startDate":null,"endDate":"2025-01-05"}
        ]"#;
        let bookings = decode_list::<Booking>(body).unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].start_date.to_string(), "2025-01-02");
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let err = decode_list::<Delegation>(r#"{"not": "a list"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn request_params_use_endpoint_parameter_names() {
        let car = Car::sample();
        let json = serde_json::to_value(SaveCarParams { car_json: &car }).unwrap();
        assert_eq!(json["carJson"]["make"], "Toyota");

        let json = serde_json::to_value(UserIdParams { user_id: "USER#001" }).unwrap();
        assert_eq!(json, serde_json::json!({ "userId": "USER#001" }));

        let json = serde_json::to_value(NoParams {}).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
