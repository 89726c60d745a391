use super::envelope;
use axum::{http::StatusCode, response::Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

const ROOT: &str = "__root__";

/// One entry of the error list returned with a 400 response.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    fn root(kind: &str, msg: impl Into<String>) -> Self {
        Self {
            loc: vec![ROOT.to_string()],
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

fn missing() -> ValidationError {
    ValidationError::new("value_error.missing").with_message(Cow::from("field required"))
}

fn not_a_string() -> ValidationError {
    ValidationError::new("type_error.str").with_message(Cow::from("str type expected"))
}

pub fn required_string(errors: &mut ValidationErrors, field: &'static str, value: &Option<Value>) {
    match value {
        None => errors.add(field, missing()),
        Some(_) => optional_string(errors, field, value),
    }
}

pub fn optional_string(errors: &mut ValidationErrors, field: &'static str, value: &Option<Value>) {
    if let Some(value) = value {
        if !value.is_string() {
            errors.add(field, not_a_string());
        }
    }
}

pub fn field_errors(errors: ValidationErrors) -> Vec<FieldError> {
    let mut list = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                loc: vec![field.to_string()],
                msg: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string()),
                kind: error.code.to_string(),
            })
        })
        .collect::<Vec<_>>();

    list.sort_by(|a, b| a.loc.cmp(&b.loc));
    list
}

/// Checks `raw` against the schema `S` and decodes the recognized fields into `T`.
///
/// `S` mirrors `T` with every field as `Option<Value>` so that missing and
/// wrongly typed fields are all reported at once instead of failing on the
/// first one. Fields neither type knows about are dropped.
pub fn parse<S, T>(raw: Value) -> Result<T, Vec<FieldError>>
where
    S: DeserializeOwned + Validate,
    T: DeserializeOwned,
{
    if !raw.is_object() {
        return Err(vec![FieldError::root(
            "type_error.dict",
            "value is not a valid dict",
        )]);
    }

    let schema = S::deserialize(&raw).map_err(decode_error)?;
    schema.validate().map_err(field_errors)?;

    T::deserialize(&raw).map_err(decode_error)
}

fn decode_error(err: serde_json::Error) -> Vec<FieldError> {
    vec![FieldError::root("value_error", err.to_string())]
}

pub fn into_response(errors: Vec<FieldError>) -> Response {
    envelope::error(StatusCode::BAD_REQUEST, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Schema {
        name: Option<Value>,
        note: Option<Value>,
    }

    impl Validate for Schema {
        fn validate(&self) -> Result<(), ValidationErrors> {
            let mut errors = ValidationErrors::new();
            required_string(&mut errors, "name", &self.name);
            optional_string(&mut errors, "note", &self.note);

            match errors.is_empty() {
                true => Ok(()),
                false => Err(errors),
            }
        }
    }

    #[derive(Deserialize, Debug, PartialEq)]
    struct Body {
        name: String,
        note: Option<String>,
    }

    #[test]
    fn accepts_valid_payload_and_drops_unknown_fields() {
        let body = parse::<Schema, Body>(json!({ "name": "a", "extra": 1 })).unwrap();
        assert_eq!(
            body,
            Body {
                name: "a".to_string(),
                note: None
            }
        );
    }

    #[test]
    fn rejects_non_object() {
        let errors = parse::<Schema, Body>(json!(["name"])).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].loc, vec!["__root__".to_string()]);
        assert_eq!(errors[0].kind, "type_error.dict");
    }

    #[test]
    fn reports_every_failing_field() {
        let errors = parse::<Schema, Body>(json!({ "note": 42 })).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].loc, vec!["name".to_string()]);
        assert_eq!(errors[0].kind, "value_error.missing");
        assert_eq!(errors[0].msg, "field required");
        assert_eq!(errors[1].loc, vec!["note".to_string()]);
        assert_eq!(errors[1].kind, "type_error.str");
    }

    #[test]
    fn null_counts_as_missing() {
        let errors = parse::<Schema, Body>(json!({ "name": null })).unwrap_err();
        assert_eq!(errors[0].kind, "value_error.missing");

        let body = parse::<Schema, Body>(json!({ "name": "a", "note": null })).unwrap();
        assert_eq!(body.note, None);
    }

    #[test]
    fn serializes_kind_as_type() {
        let value = serde_json::to_value(FieldError::root("type_error.dict", "nope")).unwrap();
        assert_eq!(
            value,
            json!({ "loc": ["__root__"], "msg": "nope", "type": "type_error.dict" })
        );
    }
}
