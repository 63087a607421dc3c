//! Request bodies for the mail and upload endpoints.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::json;

/// Body of `POST /api/mail/send`.
///
/// Fields are raw JSON so that any non-empty value passes the presence
/// check; absence is reported as a validation error, never a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailRequest {
    pub to: Option<Value>,
    pub subject: Option<Value>,
    pub body: Option<Value>,
}

/// An email with all required fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailRequest {
    /// Checks that `to`, `subject` and `body` are set (see
    /// [`json::is_truthy`]). Non-string values are kept as their JSON text.
    pub fn into_message(self) -> Result<EmailMessage, ValidationError> {
        match (
            required_text(self.to),
            required_text(self.subject),
            required_text(self.body),
        ) {
            (Some(to), Some(subject), Some(body)) => Ok(EmailMessage { to, subject, body }),
            _ => Err(ValidationError::MissingEmailFields),
        }
    }
}

fn required_text(field: Option<Value>) -> Option<String> {
    field
        .filter(json::is_truthy)
        .map(|value| json::to_text(&value))
}

/// Visitor and staff sign-in records for one month.
///
/// Borrowed view over the raw `monthlyData` value. Entries are opaque;
/// only the lengths of the `visitors` and `staff` arrays are used, and
/// anything that is not an array counts as empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyData<'a> {
    raw: Option<&'a Value>,
}

impl MonthlyData<'_> {
    pub fn visitor_count(&self) -> usize {
        json::array_len(self.raw, "visitors")
    }

    pub fn staff_count(&self) -> usize {
        json::array_len(self.raw, "staff")
    }
}

/// Body of `POST /api/sharepoint/upload`.
///
/// `monthName` and `year` are echoed back untouched, so they are kept as
/// raw JSON values; an explicit `null` is `Some(Value::Null)` and is echoed
/// too, while an absent field is `None`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadPayload {
    #[serde(default)]
    pub monthly_data: Option<Value>,
    #[serde(default, deserialize_with = "json::present")]
    pub month_name: Option<Value>,
    #[serde(default, deserialize_with = "json::present")]
    pub year: Option<Value>,
}

impl UploadPayload {
    pub fn monthly_data(&self) -> MonthlyData<'_> {
        MonthlyData {
            raw: self.monthly_data.as_ref(),
        }
    }

    pub fn visitor_count(&self) -> usize {
        self.monthly_data().visitor_count()
    }

    pub fn staff_count(&self) -> usize {
        self.monthly_data().staff_count()
    }
}
