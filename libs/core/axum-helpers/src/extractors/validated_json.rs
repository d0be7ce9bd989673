use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// `Json<T>` followed by `T::validate()`.
///
/// Malformed bodies and failed rules both answer 400 with the envelope;
/// a rule's custom `message` becomes the envelope message.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct AddToCart {
///     #[validate(range(min = 1, message = "Quantity must be at least 1"))]
///     quantity: i32,
/// }
///
/// async fn add(ValidatedJson(body): ValidatedJson<AddToCart>) { }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}
