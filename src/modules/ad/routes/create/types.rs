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
            validation::required_string(&mut errors, "ad_name", &self.ad_name);
            validation::required_string(&mut errors, "ad_body", &self.ad_body);
            validation::required_string(&mut errors, "ad_owner", &self.ad_owner);

            match errors.is_empty() {
                true => Ok(()),
                false => Err(errors),
            }
        }
    }

    #[derive(Deserialize)]
    pub struct Body {
        pub ad_name: String,
        pub ad_body: String,
        pub ad_owner: String,
    }

    pub struct Payload {
        pub body: Value,
    }
}

pub mod response {
    use crate::{
        modules::ad::repository::Ad,
        utils::{
            envelope,
            validation::{self, FieldError},
        },
    };
    use axum::{
        extract::{rejection::JsonRejection, Json},
        http::StatusCode,
        response::IntoResponse,
    };
    use serde_json::json;

    pub enum Success {
        AdCreated(Ad),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdCreated(ad) => (
                    StatusCode::OK,
                    Json(json!({
                        "id": ad.id,
                        "ad_name": ad.ad_name
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidBody(JsonRejection),
        FailedToValidate(Vec<FieldError>),
        AdNameTaken,
        AdCreationFailed,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidBody(rejection) => {
                    envelope::error(rejection.status(), rejection.body_text())
                }
                Self::FailedToValidate(errors) => validation::into_response(errors),
                Self::AdNameTaken => envelope::error(StatusCode::CONFLICT, envelope::AD_NAME_TAKEN),
                Self::AdCreationFailed => {
                    envelope::error(StatusCode::INTERNAL_SERVER_ERROR, "Ad creation failed")
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
