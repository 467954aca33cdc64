/// Acting-user extraction.
///
/// The acting user is conveyed by the `X-User-Id` header; full credential
/// checking on every request is out of scope. Handlers take `UserId` as an
/// extractor argument and get a 401 for free when the header is absent or
/// malformed.
use actix_web::{dev::Payload, error::ErrorUnauthorized, Error, FromRequest, HttpRequest};
use futures::future::{ready, Ready};
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Acting user id extracted from the request
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub Uuid);

impl FromRequest for UserId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user_id = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok());

        ready(match user_id {
            Some(id) => Ok(UserId(id)),
            None => Err(ErrorUnauthorized(
                serde_json::json!({"error": "missing or invalid x-user-id header"}),
            )),
        })
    }
}
