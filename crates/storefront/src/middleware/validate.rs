use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use shared::errors::HttpError;
use validator::{Validate, ValidationErrors};

/// JSON body extractor that runs `validator` rules after deserializing.
/// Both malformed bodies and rule violations are answered with 400.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| HttpError::BadRequest(format_validation_errors(&errors)))?;

        Ok(Self(value))
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| match error.code.as_ref() {
                    "length" => "Invalid length".to_string(),
                    "range" => "Value out of range".to_string(),
                    "email" => "Invalid email format".to_string(),
                    _ => format!("Invalid {field}"),
                });
            messages.push(format!("{field}: {message}"));
        }
    }

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.sort();
        messages.join("; ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(range(min = 1))]
        quantity: i32,
    }

    #[test]
    fn messages_name_each_failing_field() {
        let sample = Sample {
            name: String::new(),
            quantity: 0,
        };
        let errors = sample.validate().unwrap_err();

        assert_eq!(
            format_validation_errors(&errors),
            "name: Name is required; quantity: Value out of range"
        );
    }
}
