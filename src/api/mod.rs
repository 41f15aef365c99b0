// API layer - HTTP endpoints
pub mod auth_gate;
pub mod health;
pub mod users;

pub use auth_gate::BearerAuth;
pub use health::HealthApi;
pub use users::UsersApi;

use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;
use crate::app_data::AppData;

/// Compose the HTTP application
///
/// API under `/api-v1`, Swagger UI under `/swagger`. The token service is
/// attached as request data for the bearer checker.
pub fn build_routes(app_data: &AppData, server_url: &str) -> impl Endpoint + use<> {
    let users_api = UsersApi::new(app_data.account_service.clone());

    let api_service = OpenApiService::new((HealthApi, users_api), "Scorekeeper API", "1.0.0")
        .server(server_url);

    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api-v1", api_service)
        .nest("/swagger", ui)
        .data(app_data.token_service.clone())
}
