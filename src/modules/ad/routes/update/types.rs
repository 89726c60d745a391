pub mod request {
    use crate::utils::validation;
    use serde::Deserialize;
    use serde_json::Value;
    use validator::{Validate, ValidationErrors};

    #[derive(Deserialize)]
    pub struct Schema {
        pub ad_name: Option<Value>,
        pub ad_body: Option<Value>,
        pub ad_owner: Option<Value>,
    }

    impl Validate for Schema {
        fn validate(&self) -> Result<(), ValidationErrors> {
            let mut errors = ValidationErrors::new();
            validation::optional_string(&mut errors, "ad_name", &self.ad_name);
            validation::optional_string(&mut errors, "ad_body", &self.ad_body);
            validation::optional_string(&mut errors, "ad_owner", &self.ad_owner);

            match errors.is_empty() {
                true => Ok(()),
                false => Err(errors),
            }
        }
    }

    /// `ad_owner` is accepted and checked but never written back.
    #[derive(Deserialize)]
    pub struct Body {
        pub ad_name: Option<String>,
        pub ad_body: Option<String>,
        pub ad_owner: Option<String>,
    }

    pub struct Payload {
        pub id: i32,
        pub body: Value,
    }
}

pub mod response {
    use crate::utils::{
        envelope,
        validation::{self, FieldError},
    };
    use axum::{extract::rejection::JsonRejection, http::StatusCode, response::IntoResponse};

    pub enum Success {
        AdUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdUpdated => envelope::success(),
            }
        }
    }

    pub enum Error {
        InvalidBody(JsonRejection),
        FailedToValidate(Vec<FieldError>),
        AdNotFound,
        AdNameTaken,
        FailedToFetchAd,
        FailedToUpdateAd,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidBody(rejection) => {
                    envelope::error(rejection.status(), rejection.body_text())
                }
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::AdNotFound => envelope::error(StatusCode::NOT_FOUND, envelope::AD_NOT_FOUND),
                Self::AdNameTaken => envelope::error(StatusCode::CONFLICT, envelope::AD_NAME_TAKEN),
                Self::FailedToFetchAd => {
                    envelope::error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to find ad")
                }
                Self::FailedToUpdateAd => {
                    envelope::error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to update ad")
                }
                Self::UnexpectedError => envelope::error(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Sorry an error occurred",
                ),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
