/// Contact form submission as received on the wire
use crate::error::RelayError;
use crate::utils::validation::validate_email_address;
use serde_json::{Map, Value};

const FIELD_NAME: &str = "nombre";
const FIELD_EMAIL: &str = "email";
const FIELD_MESSAGE: &str = "mensaje";

/// Raw contact form payload
///
/// Every field is optional here so that a missing field is reported as a
/// validation failure instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

/// A submission whose fields are present and whose email is well formed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
}

impl ContactSubmission {
    /// Parses a request body
    ///
    /// Only bytes that are not JSON, or a literal `null`, are malformed. Any
    /// other non-object document carries no fields. Duplicate keys keep the
    /// last value.
    pub fn from_slice(body: &[u8]) -> Result<Self, RelayError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Null => Err(RelayError::MalformedPayload(
                "payload is null".to_string(),
            )),
            Value::Object(map) => Ok(Self::from_map(&map)),
            _ => Ok(Self::default()),
        }
    }

    fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            name: map.get(FIELD_NAME).and_then(field_text),
            email: map.get(FIELD_EMAIL).and_then(field_text),
            message: map.get(FIELD_MESSAGE).and_then(field_text),
        }
    }

    /// Checks that all fields are present and the email looks valid
    pub fn validate(&self) -> Result<Submission<'_>, RelayError> {
        let ContactSubmission {
            name: Some(name),
            email: Some(email),
            message: Some(message),
        } = self
        else {
            return Err(RelayError::MissingFields(self.missing_fields().join(", ")));
        };

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(RelayError::MissingFields(self.missing_fields().join(", ")));
        }

        validate_email_address(email)?;

        Ok(Submission {
            name,
            email,
            message,
        })
    }

    /// Wire names of the fields that are absent or empty
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            (FIELD_NAME, &self.name),
            (FIELD_EMAIL, &self.email),
            (FIELD_MESSAGE, &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
        .map(|(field, _)| field)
        .collect()
    }
}

/// Text of a field value, `None` when the value is falsy
///
/// `null`, `false`, `0` and `""` count as missing. Other numbers and `true`
/// are used as their JSON text, as are arrays and objects.
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text.clone()),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
