use schemars::JsonSchema;
use serde::Serialize;

use crate::handler::Error;

/// JSON body returned for every failed request.
///
/// Built from an [`Error`]; its status code and internal context never
/// reach the client.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ErrorResponse {
    /// Snake-case error identifier, e.g. `not_found`.
    pub name: String,
    /// Message safe to show to the caller.
    pub message: String,
    /// What the error refers to, e.g. `workflow`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
    /// How the caller might fix the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl From<&Error> for ErrorResponse {
    fn from(error: &Error) -> Self {
        let kind = error.kind();
        let message = match error.message() {
            Some(detail) => format!("{} {}", kind.default_message(), detail),
            None => kind.default_message().to_owned(),
        };

        Self {
            name: kind.name().to_owned(),
            message,
            resource: error.resource().map(str::to_owned),
            suggestion: error.suggestion().map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::ErrorKind;

    #[test]
    fn body_from_kind_uses_defaults() {
        let body = ErrorResponse::from(&Error::new(ErrorKind::NotFound));
        assert_eq!(body.name, "not_found");
        assert_eq!(body.message, "Resource not found.");
        assert!(body.resource.is_none());
    }

    #[test]
    fn message_detail_follows_the_default() {
        let error = ErrorKind::BadRequest.with_message("Invalid query parameter type");
        let body = ErrorResponse::from(&error);
        assert_eq!(
            body.message,
            "Invalid request data. Invalid query parameter type"
        );
    }

    #[test]
    fn context_is_not_serialized() {
        let error = ErrorKind::NotFound
            .with_resource("workflow")
            .with_message("Workflow not found")
            .with_context("filename: missing.json")
            .with_suggestion("List workflows first");

        let json = serde_json::to_value(ErrorResponse::from(&error)).unwrap();

        assert_eq!(json["name"], "not_found");
        assert_eq!(json["resource"], "workflow");
        assert_eq!(json["suggestion"], "List workflows first");
        assert!(json.get("context").is_none());
        assert!(json.get("status").is_none());
    }
}
