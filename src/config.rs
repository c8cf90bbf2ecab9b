const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
const DEFAULT_USER_ID: &str = "USER#001";
const DEFAULT_BOOKING_OPERATION: &str = "booking#2025#005";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    /// Usuario actual; se pasa explícitamente a las vistas que lo necesitan
    pub current_user_id: String,
    /// Etiqueta `operation` de las reservas nuevas
    pub booking_operation: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            current_user_id: DEFAULT_USER_ID.to_string(),
            booking_operation: DEFAULT_BOOKING_OPERATION.to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("BACKEND_URL"),
            option_env!("ENVIRONMENT"),
            option_env!("ENABLE_LOGGING"),
            option_env!("CURRENT_USER_ID"),
            option_env!("BOOKING_OPERATION"),
        )
    }

    fn from_values(
        backend_url: Option<&str>,
        environment: Option<&str>,
        enable_logging: Option<&str>,
        current_user_id: Option<&str>,
        booking_operation: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            backend_url: backend_url
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            environment: environment
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: enable_logging
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            current_user_id: current_user_id
                .filter(|id| !id.trim().is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.current_user_id),
            booking_operation: booking_operation
                .map(str::to_string)
                .unwrap_or(defaults.booking_operation),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    /// Nivel de log según entorno
    pub fn log_level(&self) -> log::Level {
        if self.is_production() {
            log::Level::Warn
        } else {
            log::Level::Debug
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
