use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};
use crate::api::auth_gate::BearerAuth;
use crate::services::AccountService;
use crate::types::dto::common::MessageResponse;
use crate::types::dto::users::{
    LoginRequest, ProfileResponse, RegisterRequest, ScoreResponse, ScoreUpdateBody, TokenResponse,
    UpdateProfileRequest,
};
use crate::errors::UsersApiError;
use std::sync::Arc;

/// Users API endpoints
pub struct UsersApi {
    account_service: Arc<AccountService>,
}

impl UsersApi {
    pub fn new(account_service: Arc<AccountService>) -> Self {
        Self { account_service }
    }
}

/// API tags for users endpoints
#[derive(Tags)]
enum UsersTags {
    /// Account registration, login, profile and score
    Users,
}

#[OpenApi]
impl UsersApi {
    /// Users endpoint greeting
    #[oai(path = "/users", method = "get", tag = "UsersTags::Users")]
    async fn index(&self) -> Json<MessageResponse> {
        Json(MessageResponse {
            msg: "welcome to the users endpoint".to_string(),
        })
    }

    /// Register a new account and receive a bearer token
    #[oai(path = "/users/register", method = "post", tag = "UsersTags::Users")]
    async fn register(&self, body: Json<RegisterRequest>) -> Result<Json<TokenResponse>, UsersApiError> {
        let RegisterRequest { name, email, password } = body.0;

        let token = self.account_service.register(name, email, password).await?;

        Ok(Json(TokenResponse { token }))
    }

    /// Login with email and password to receive a bearer token
    #[oai(path = "/users/login", method = "post", tag = "UsersTags::Users")]
    async fn login(&self, body: Json<LoginRequest>) -> Result<Json<TokenResponse>, UsersApiError> {
        let token = self.account_service.login(&body.email, &body.password).await?;

        Ok(Json(TokenResponse { token }))
    }

    /// Update email and/or password of the authenticated account
    #[oai(path = "/users/profile", method = "put", tag = "UsersTags::Users")]
    async fn update_profile(
        &self,
        auth: BearerAuth,
        body: Json<UpdateProfileRequest>,
    ) -> Result<Json<ProfileResponse>, UsersApiError> {
        let ctx = auth.0;
        let UpdateProfileRequest { email, password } = body.0;

        tracing::debug!(request_id = %ctx.request_id, "Profile update for {}", ctx.account_id());

        let account = self
            .account_service
            .update_profile(ctx.account_id(), email, password)
            .await?;

        Ok(Json(ProfileResponse {
            message: "User email and password updated successfully".to_string(),
            user: account.into(),
        }))
    }

    /// Read an account's score
    #[oai(path = "/users/update-score/:id", method = "get", tag = "UsersTags::Users")]
    async fn get_score(&self, id: Path<String>) -> Result<Json<ScoreResponse>, UsersApiError> {
        let account = self.account_service.get_score(&id.0).await?;

        Ok(Json(ScoreResponse {
            msg: "score fetched successfully".to_string(),
            user: account.into(),
        }))
    }

    /// Add points (may be negative) to an account's score
    ///
    /// The body is optional; without one the score is left as it is.
    #[oai(path = "/users/update-score/:id", method = "put", tag = "UsersTags::Users")]
    async fn update_score(
        &self,
        id: Path<String>,
        body: ScoreUpdateBody,
    ) -> Result<Json<ScoreResponse>, UsersApiError> {
        let account = self.account_service.update_score(&id.0, body.points()).await?;

        Ok(Json(ScoreResponse {
            msg: "score updated successfully".to_string(),
            user: account.into(),
        }))
    }

    /// Private route, reachable only with a valid bearer token
    #[oai(path = "/users/auth-locked", method = "get", tag = "UsersTags::Users")]
    async fn auth_locked(&self, auth: BearerAuth) -> Json<MessageResponse> {
        tracing::debug!(request_id = %auth.0.request_id, "Private route accessed by {}", auth.0.account_id());

        Json(MessageResponse {
            msg: "welcome to the private route!".to_string(),
        })
    }
}
