pub mod request {
    pub struct Payload {
        pub id: i32,
    }
}

pub mod response {
    use crate::utils::envelope;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        AdDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdDeleted => envelope::success(),
            }
        }
    }

    pub enum Error {
        AdNotFound,
        FailedToDeleteAd,
        UnexpectedError,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdNotFound => envelope::error(StatusCode::NOT_FOUND, envelope::AD_NOT_FOUND),
                Self::FailedToDeleteAd => {
                    envelope::error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete ad")
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
