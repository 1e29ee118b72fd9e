use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use std::fmt::Display;
use tracing::debug;

use crate::errors::ApiError;

/// A resource that can be resolved from the `{id}` segment of a path.
#[async_trait]
pub trait ResourceLookup<S: Send + Sync>: Sized + Send {
    type Id: DeserializeOwned + Display + Send;

    /// Used in the not-found message, e.g. "Article does not exist".
    const NAME: &'static str;

    async fn lookup(state: &S, id: Self::Id) -> Result<Option<Self>, ApiError>;
}

/// A record that is known to exist. Rejects with a 404 before the handler
/// runs, so handlers on `/{id}` routes never see a missing target.
#[derive(Debug, Clone)]
pub struct Existing<T>(pub T);

impl<S, T> FromRequestParts<S> for Existing<T>
where
    S: Send + Sync,
    T: ResourceLookup<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<T::Id>::from_request_parts(parts, state).await?;

        let id_display = id.to_string();
        match T::lookup(state, id).await? {
            Some(resource) => Ok(Existing(resource)),
            None => {
                debug!(resource = T::NAME, id = %id_display, "Resource not found");
                Err(ApiError::NotFound(T::NAME))
            }
        }
    }
}
