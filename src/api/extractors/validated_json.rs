//! JSON body extractor that refuses payloads failing `validator` rules.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// A request body that parsed as `T` and passed `T::validate`.
///
/// Every way of failing, whether a missing JSON content type, broken JSON, a
/// missing or mistyped field, or a rule violation, surfaces as
/// `AppError::Validation` (422). Handlers taking this extractor therefore
/// never see input the store would have to reject on shape alone.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = match Json::<T>::from_request(req, state).await {
            Ok(Json(body)) => body,
            Err(rejection) => return Err(AppError::validation(rejection.body_text())),
        };

        match body.validate() {
            Ok(()) => Ok(Self(body)),
            Err(errors) => Err(AppError::validation(describe(&errors))),
        }
    }
}

/// One message per failed rule, falling back to `<field> is invalid`.
/// Sorted, since `field_errors` iterates a hash map.
fn describe(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    for (field, failures) in errors.field_errors() {
        for failure in failures {
            messages.push(match &failure.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid", field),
            });
        }
    }
    messages.sort();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::header};
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct Named {
        #[validate(length(min = 1, message = "name must not be empty"))]
        name: String,
        #[validate(length(min = 3))]
        code: String,
    }

    fn json_request(body: &str) -> Request {
        Request::post("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_accepts_valid_body() {
        let ValidatedJson(named) =
            ValidatedJson::<Named>::from_request(json_request(r#"{"name":"Ann","code":"abc"}"#), &())
                .await
                .unwrap();
        assert_eq!(named.name, "Ann");
    }

    #[tokio::test]
    async fn test_rule_violations_are_listed_in_order() {
        let err = ValidatedJson::<Named>::from_request(json_request(r#"{"name":"","code":"x"}"#), &())
            .await
            .err()
            .unwrap();
        match err {
            AppError::Validation(message) => {
                assert_eq!(message, "code is invalid, name must not be empty")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_content_type_is_validation_error() {
        let request = Request::post("/")
            .body(Body::from(r#"{"name":"Ann","code":"abc"}"#))
            .unwrap();
        let err = ValidatedJson::<Named>::from_request(request, &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
