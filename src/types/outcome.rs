//! The unified result value returned to every gateway caller.

use serde::Serialize;
use serde::ser::SerializeMap;
use serde_json::Value;

use crate::FetchError;

/// Result of a gateway operation.
///
/// This is a value, not an error: gateway operations never return `Err`
/// and never panic. Callers branch on the variant (or on the serialized
/// `error: true` marker), never on caught exceptions.
///
/// Serializes to the wire contract the UI layers consume: a success is the
/// provider payload verbatim, a failure is `{"error": true, "message"}`.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Decoded JSON payload from the provider.
    Success(Value),
    /// Uniform error shape. The message embeds provider/transport detail;
    /// callers need no further structure (see DESIGN.md).
    Failure { message: String },
}

impl FetchOutcome {
    /// Build a failure from a message.
    pub fn failure(message: impl Into<String>) -> Self {
        FetchOutcome::Failure {
            message: message.into(),
        }
    }

    /// Whether this outcome is the uniform error shape.
    pub fn is_error(&self) -> bool {
        matches!(self, FetchOutcome::Failure { .. })
    }

    /// The success payload, if any.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            FetchOutcome::Success(value) => Some(value),
            FetchOutcome::Failure { .. } => None,
        }
    }

    /// The failure message, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchOutcome::Success(_) => None,
            FetchOutcome::Failure { message } => Some(message),
        }
    }

    /// Convert into a plain JSON value in the wire shape.
    pub fn into_value(self) -> Value {
        match self {
            FetchOutcome::Success(value) => value,
            FetchOutcome::Failure { message } => serde_json::json!({
                "error": true,
                "message": message,
            }),
        }
    }
}

impl From<FetchError> for FetchOutcome {
    fn from(err: FetchError) -> Self {
        FetchOutcome::Failure {
            message: err.to_string(),
        }
    }
}

impl<E: Into<FetchOutcome>> From<Result<Value, E>> for FetchOutcome {
    fn from(result: Result<Value, E>) -> Self {
        match result {
            Ok(value) => FetchOutcome::Success(value),
            Err(err) => err.into(),
        }
    }
}

impl Serialize for FetchOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            FetchOutcome::Success(value) => value.serialize(serializer),
            FetchOutcome::Failure { message } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("error", &true)?;
                map.serialize_entry("message", message)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_serializes_to_payload_verbatim() {
        let outcome = FetchOutcome::Success(json!({"data": [1, 2, 3]}));
        let serialized = serde_json::to_value(&outcome).unwrap();
        assert_eq!(serialized, json!({"data": [1, 2, 3]}));
    }

    #[test]
    fn failure_serializes_to_uniform_shape() {
        let outcome = FetchOutcome::failure("external API error: Not Found");
        let serialized = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            serialized,
            json!({"error": true, "message": "external API error: Not Found"})
        );
    }

    #[test]
    fn from_error_uses_display_text() {
        let outcome: FetchOutcome = FetchError::Http { status: 502 }.into();
        assert_eq!(outcome.error_message(), Some("HTTP error: status 502"));
    }

    #[test]
    fn from_result_maps_both_variants() {
        let ok: FetchOutcome = Ok::<_, FetchError>(json!(1)).into();
        assert_eq!(ok.payload(), Some(&json!(1)));

        let err: FetchOutcome = Err::<Value, _>(FetchError::QueueClosed).into();
        assert!(err.is_error());
    }
}
