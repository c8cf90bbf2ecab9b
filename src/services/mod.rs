pub mod api_client;
pub mod api_error;
pub mod endpoints;
pub mod notifier;

pub use api_client::ApiClient;
pub use api_error::ApiError;
pub use endpoints::{CarEndpoint, DelegationEndpoint, UserEndpoint};
pub use notifier::{Notifier, WindowNotifier};
