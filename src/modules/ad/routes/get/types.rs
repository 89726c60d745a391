pub mod request {
    pub struct Payload {
        pub id: i32,
    }
}

pub mod response {
    use crate::{modules::ad::repository::Ad, utils::envelope};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Ad(Ad),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Ad(ad) => (
                    StatusCode::OK,
                    Json(json!({
                        "ad_name": ad.ad_name,
                        "ad_body": ad.ad_body,
                        "ad_owner": ad.ad_owner,
                        "created_at": ad.created_at,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchAd,
        AdNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::AdNotFound => envelope::error(StatusCode::NOT_FOUND, envelope::AD_NOT_FOUND),
                Self::FailedToFetchAd => {
                    envelope::error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch ad")
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
