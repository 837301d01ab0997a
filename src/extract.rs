//! Request extractors whose rejections render through [`ApiError`], so malformed
//! bodies and path ids still get a JSON `{error}` body.

use axum::extract::{FromRequest, FromRequestParts, Multipart};

use crate::error::ApiError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct AppPath<T>(pub T);

#[derive(FromRequest)]
#[from_request(rejection(ApiError))]
pub struct AppMultipart(pub Multipart);
