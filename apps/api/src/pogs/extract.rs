//! Body extractor for create/update.

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::header,
    Form, Json,
};
use tracing::debug;

use crate::pogs::validation::PogPayload;

/// Create/update body, read as a form when the request says
/// `application/x-www-form-urlencoded` and as JSON otherwise.
///
/// Never rejects: a missing, unreadable or non-object body yields a payload
/// with every field absent, which validation then answers with the endpoint's
/// fixed 422 message.
pub struct PogBody(pub PogPayload);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|ct| ct.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

#[async_trait]
impl<S> FromRequest<S> for PogBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let payload = if is_form(&req) {
            match Form::<PogPayload>::from_request(req, state).await {
                Ok(Form(payload)) => payload,
                Err(rejection) => {
                    debug!("Unreadable form body: {rejection}");
                    PogPayload::default()
                }
            }
        } else {
            match Json::<PogPayload>::from_request(req, state).await {
                Ok(Json(payload)) => payload,
                Err(rejection) => {
                    debug!("Unreadable JSON body: {rejection}");
                    PogPayload::default()
                }
            }
        };
        Ok(PogBody(payload))
    }
}
