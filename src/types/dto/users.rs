use poem::{Request, RequestBody};
use poem_openapi::payload::{Json, Payload};
use poem_openapi::registry::{MetaMediaType, MetaRequest, Registry};
use poem_openapi::{ApiExtractor, ApiExtractorType, ExtractParamOptions, Object};
use serde::{Deserialize, Serialize};
use crate::types::db::account;

/// Request model for account registration
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name
    pub name: String,

    /// Email address; must not already be registered
    pub email: String,

    /// Plaintext password, hashed before it is stored
    pub password: String,
}

/// Request model for login
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response model carrying a signed bearer token
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Request model for profile update
///
/// A missing or empty field leaves the stored value unchanged.
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response model for profile update
#[derive(Object, Debug)]
pub struct ProfileResponse {
    pub message: String,
    pub user: AccountResponse,
}

/// Request model for score update
#[derive(Object, Debug, Default, Serialize, Deserialize)]
pub struct UpdateScoreRequest {
    /// Points to add; may be negative. Defaults to 0.
    pub points: Option<i64>,
}

/// Optional JSON body of a score update
///
/// A request without a Content-Type carries no body and extracts as `None`,
/// so a bare `PUT` adds 0 points. A declared body must still be valid JSON.
#[derive(Debug, Default)]
pub struct ScoreUpdateBody(pub Option<UpdateScoreRequest>);

impl ScoreUpdateBody {
    pub fn points(&self) -> Option<i64> {
        self.0.as_ref().and_then(|body| body.points)
    }
}

impl<'a> ApiExtractor<'a> for ScoreUpdateBody {
    const TYPES: &'static [ApiExtractorType] = &[ApiExtractorType::RequestObject];

    type ParamType = ();
    type ParamRawType = ();

    fn register(registry: &mut Registry) {
        <Json<UpdateScoreRequest> as Payload>::register(registry);
    }

    fn request_meta() -> Option<MetaRequest> {
        Some(MetaRequest {
            description: None,
            content: vec![MetaMediaType {
                content_type: <Json<UpdateScoreRequest> as Payload>::CONTENT_TYPE,
                schema: <Json<UpdateScoreRequest> as Payload>::schema_ref(),
            }],
            required: false,
        })
    }

    async fn from_request(
        request: &'a Request,
        body: &mut RequestBody,
        param_opts: ExtractParamOptions<Self::ParamType>,
    ) -> poem::Result<Self> {
        if request.content_type().is_none() {
            return Ok(Self(None));
        }

        let Json(payload) =
            <Json<Option<UpdateScoreRequest>> as ApiExtractor<'a>>::from_request(request, body, param_opts)
                .await?;

        Ok(Self(payload))
    }
}

/// Response model for score read and update
#[derive(Object, Debug)]
pub struct ScoreResponse {
    pub msg: String,
    pub user: AccountResponse,
}

/// Public view of an account; the password digest is never included
#[derive(Object, Debug, Clone, PartialEq)]
pub struct AccountResponse {
    #[oai(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub score: i64,
}

impl From<account::Model> for AccountResponse {
    fn from(model: account::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            score: model.score,
        }
    }
}
