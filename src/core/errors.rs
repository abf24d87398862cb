use crate::core::types::Verb;
use std::fmt;
use thiserror::Error;

/// Request/response context attached to every HTTP status error.
///
/// Carries enough of the original exchange for callers to log or inspect
/// without holding onto the transport's response object.
#[derive(Debug, Clone)]
pub struct HttpContext {
    pub verb: Verb,
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl fmt::Display for HttpContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} returned {}", self.verb, self.url, self.status)
    }
}

/// Errors raised by the client.
///
/// The first eight variants map one-to-one onto the status codes the API
/// documents (see <https://docs.companycam.com/reference/codes>); callers
/// catch them by kind for semantic handling. None of them is ever split into
/// further sub-kinds.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("the request is invalid: {0}")]
    BadRequest(HttpContext),

    #[error("the user needs to authenticate or authentication failed: {0}")]
    Unauthorized(HttpContext),

    #[error("the user's subscription has expired: {0}")]
    PaymentRequired(HttpContext),

    #[error("the user doesn't have privilege to access the resource: {0}")]
    Forbidden(HttpContext),

    #[error("the specified resource could not be found: {0}")]
    NotFound(HttpContext),

    #[error("the entity is not unique: {0}")]
    Conflict(HttpContext),

    #[error("there was an issue persisting the request due to invalid data: {0}")]
    UnprocessableEntity(HttpContext),

    #[error("the server had a problem: {0}")]
    InternalServerError(HttpContext),

    /// A non-2xx status outside the documented set (e.g. 429).
    #[error("unexpected status: {0}")]
    UnexpectedStatus(HttpContext),

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response body: {0}")]
    Decode(String),

    #[error("failed to serialize request body: {0}")]
    Encode(String),

    /// Programmer error while binding method arguments into a URL template.
    #[error("url binding error: {0}")]
    UrlBind(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("config error: {0}")]
    Config(#[from] crate::core::config::ConfigError),
}

impl ApiError {
    /// The HTTP status code, for errors raised by the status hook.
    pub fn status(&self) -> Option<u16> {
        self.context().map(|ctx| ctx.status)
    }

    /// The request/response context, for errors raised by the status hook.
    pub fn context(&self) -> Option<&HttpContext> {
        match self {
            Self::BadRequest(ctx)
            | Self::Unauthorized(ctx)
            | Self::PaymentRequired(ctx)
            | Self::Forbidden(ctx)
            | Self::NotFound(ctx)
            | Self::Conflict(ctx)
            | Self::UnprocessableEntity(ctx)
            | Self::InternalServerError(ctx)
            | Self::UnexpectedStatus(ctx) => Some(ctx),
            _ => None,
        }
    }
}

/// Static status-code table. Exactly one kind per code; uniqueness is
/// asserted below rather than discovered at runtime.
pub const STATUS_CODE_MAP: &[(u16, fn(HttpContext) -> ApiError)] = &[
    (400, ApiError::BadRequest),
    (401, ApiError::Unauthorized),
    (402, ApiError::PaymentRequired),
    (403, ApiError::Forbidden),
    (404, ApiError::NotFound),
    (409, ApiError::Conflict),
    (422, ApiError::UnprocessableEntity),
    (500, ApiError::InternalServerError),
];

fn error_for_status(status: u16, ctx: HttpContext) -> Option<ApiError> {
    debug_assert!(
        STATUS_CODE_MAP
            .iter()
            .all(|(code, _)| STATUS_CODE_MAP.iter().filter(|(c, _)| c == code).count() == 1),
        "status code map must have one kind per code"
    );
    STATUS_CODE_MAP
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, make)| make(ctx))
}

/// Response-inspection hook, run on every response before any decoding.
///
/// Documented status codes raise their mapped kind. Any other non-2xx status
/// raises [`ApiError::UnexpectedStatus`]. Successful statuses pass through.
pub fn raise_for_status(verb: Verb, url: &str, status: u16, body: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let ctx = HttpContext {
        verb,
        url: url.to_string(),
        status,
        body: body.to_string(),
    };
    Err(error_for_status(status, ctx.clone()).unwrap_or(ApiError::UnexpectedStatus(ctx)))
}
