use super::envelope;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::Response,
    RequestPartsExt,
};

/// Positive integer primary key taken from the `:id` path segment.
///
/// Anything that is not a positive `i32` is answered with a 404 before the
/// handler runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceId(pub i32);

impl ResourceId {
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        raw.parse::<i32>().ok().filter(|id| *id > 0).map(Self)
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for ResourceId {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extract::<Path<String>>().await {
            Ok(Path(raw)) => ResourceId::parse(&raw).ok_or_else(|| {
                tracing::debug!("Rejected malformed resource id {:?}", raw);
                envelope::error(StatusCode::NOT_FOUND, envelope::RESOURCE_NOT_FOUND)
            }),
            _ => Err(envelope::error(
                StatusCode::NOT_FOUND,
                envelope::RESOURCE_NOT_FOUND,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ResourceId;

    #[test]
    fn parses_positive_integers() {
        assert_eq!(ResourceId::parse("1"), Some(ResourceId(1)));
        assert_eq!(ResourceId::parse("2147483647"), Some(ResourceId(i32::MAX)));
    }

    #[test]
    fn rejects_everything_else() {
        for raw in ["0", "-1", "abc", "1.5", "", "2147483648", " 1", "+1"] {
            assert_eq!(ResourceId::parse(raw), None, "{raw:?} should be rejected");
        }
    }
}
