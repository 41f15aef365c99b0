use std::net::IpAddr;
use std::sync::Arc;

use poem::{IntoResponse, Request};
use poem_openapi::{auth::Bearer, SecurityScheme};

use crate::errors::{InternalError, UsersApiError};
use crate::services::TokenService;
use crate::types::internal::RequestContext;

/// JWT Bearer token authentication
///
/// A request without an `Authorization: Bearer` header is rejected with 401
/// before the checker runs. A token that does not verify is rejected by the
/// checker with 401, so a handler taking `BearerAuth` only ever sees a
/// genuine `RequestContext`.
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT",
    checker = "verify_bearer"
)]
pub struct BearerAuth(pub RequestContext);

async fn verify_bearer(req: &Request, bearer: Bearer) -> poem::Result<RequestContext> {
    let Some(token_service) = req.data::<Arc<TokenService>>() else {
        tracing::error!("TokenService missing from request data");
        return Err(poem::Error::from_response(
            UsersApiError::internal_server_error().into_response(),
        ));
    };

    let ip_address = RequestContext::extract_ip_address(req);

    authenticate(token_service, &bearer.token, ip_address).map_err(|e| {
        poem::Error::from_response(UsersApiError::from_internal_error(e).into_response())
    })
}

/// Verify a bearer token and build the request context from its claims
pub fn authenticate(
    token_service: &TokenService,
    token: &str,
    ip_address: Option<IpAddr>,
) -> Result<RequestContext, InternalError> {
    let claims = token_service.verify(token)?;

    let ctx = RequestContext::new(claims).with_ip_address(ip_address);

    tracing::debug!(
        request_id = %ctx.request_id,
        account_id = %ctx.account_id(),
        "Bearer token accepted"
    );

    Ok(ctx)
}
