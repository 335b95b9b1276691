use crate::error::{AppError, AppResult};
use axum::extract::{FromRequestParts, Query, rejection::QueryRejection};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query string extractor that runs `Validate` after deserializing.
///
/// Malformed query strings and validation failures both reject with
/// [`AppError::BadRequest`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use serde::Deserialize;
    use std::borrow::Cow;
    use validator::{ValidationError, ValidationErrors};

    #[derive(Debug, Deserialize)]
    struct Params {
        count: u32,
    }

    impl Validate for Params {
        fn validate(&self) -> Result<(), ValidationErrors> {
            if self.count > 10 {
                let mut errors = ValidationErrors::new();
                errors.add(
                    "count",
                    ValidationError::new("range").with_message(Cow::Borrowed("Count too large")),
                );
                return Err(errors);
            }
            Ok(())
        }
    }

    async fn extract(uri: &str) -> AppResult<ValidatedQuery<Params>> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ValidatedQuery::<Params>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_valid_query() {
        let ValidatedQuery(params) = extract("/test?count=3").await.unwrap();
        assert_eq!(params.count, 3);
    }

    #[tokio::test]
    async fn test_validation_failure() {
        match extract("/test?count=11").await {
            Err(AppError::BadRequest { message }) => assert_eq!(message, "Count too large"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_query() {
        match extract("/test?count=many").await {
            Err(AppError::BadRequest { message }) => {
                assert!(message.starts_with("Failed to deserialize query string"));
            }
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_required_field() {
        assert!(matches!(
            extract("/test").await,
            Err(AppError::BadRequest { .. })
        ));
    }
}
