use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Body extractor accepting either `application/json` or an urlencoded form,
/// chosen by the request's content type. A request without content type and
/// without body yields `T::default()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOrForm<T>(pub T);

impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()).map(str::to_owned);

        match content_type.as_deref() {
            Some(ct) if ct.starts_with("application/json") => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::Rejected { status: e.status(), message: e.body_text() })?;
                Ok(Self(value))
            }
            Some(_) => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::Rejected { status: e.status(), message: e.body_text() })?;
                Ok(Self(value))
            }
            None => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| AppError::Rejected { status: e.status(), message: e.body_text() })?;
                if bytes.is_empty() {
                    Ok(Self(T::default()))
                } else {
                    Err(AppError::BadRequest("request body needs a Content-Type header".to_string()))
                }
            }
        }
    }
}
