//! Record shapes stored in the external CRUD collections.
//!
//! DESIGN
//! ======
//! Both collections are owned by the external store. Field names follow the
//! store's camelCase wire format; store-managed meta fields (`_createdDate`,
//! `_updatedDate`, ...) are ignored on read.

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

const ISO_DAY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

// =============================================================================
// FLIGHT RECORD
// =============================================================================

/// One row of the flights collection. Read-only from this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_date: Option<DateValue>,
    /// Stored time-of-day; shape is not guaranteed, so it stays opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aircraft_type: Option<String>,
}

/// A date field as emitted by hosted stores: a bare string or `{"$date": ...}`.
/// Any other shape is kept so one odd row does not fail the whole bulk read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Text(String),
    Wrapped {
        #[serde(rename = "$date")]
        date: String,
    },
    Other(serde_json::Value),
}

impl DateValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Wrapped { date: s } => Some(s),
            Self::Other(_) => None,
        }
    }

    /// Calendar day as written in the record, or `None` if empty or unparseable.
    #[must_use]
    pub fn calendar_day(&self) -> Option<Date> {
        self.as_str().and_then(parse_calendar_day)
    }
}

/// Parse the calendar day out of an ISO date or datetime string.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 datetimes (the day is taken in the
/// string's own offset), and naive `YYYY-MM-DDTHH:MM[:SS]` forms.
#[must_use]
pub fn parse_calendar_day(raw: &str) -> Option<Date> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt.date());
    }

    let (day, rest) = raw.split_at_checked(10)?;
    if !(rest.is_empty() || rest.starts_with('T') || rest.starts_with(' ')) {
        return None;
    }
    Date::parse(day, ISO_DAY).ok()
}

// =============================================================================
// CONTACT SUBMISSION
// =============================================================================

/// The four user-editable contact form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFields {
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub message_content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    SenderName,
    SenderEmail,
    Subject,
    MessageContent,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::SenderName, Self::SenderEmail, Self::Subject, Self::MessageContent];

    /// Form input name, identical to the wire field name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::SenderName => "senderName",
            Self::SenderEmail => "senderEmail",
            Self::Subject => "subject",
            Self::MessageContent => "messageContent",
        }
    }

    /// Field whose form input name is `name`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::SenderName => "Adınız Soyadınız",
            Self::SenderEmail => "E-posta Adresiniz",
            Self::Subject => "Konu",
            Self::MessageContent => "Mesajınız",
        }
    }
}

impl ContactFields {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::SenderName => &self.sender_name,
            ContactField::SenderEmail => &self.sender_email,
            ContactField::Subject => &self.subject,
            ContactField::MessageContent => &self.message_content,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::SenderName => &mut self.sender_name,
            ContactField::SenderEmail => &mut self.sender_email,
            ContactField::Subject => &mut self.subject,
            ContactField::MessageContent => &mut self.message_content,
        };
        *slot = value;
    }

    /// First field left empty, in form order.
    #[must_use]
    pub fn first_missing(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }
}

/// One record of the contact-submissions collection. Write-only from here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(rename = "_id")]
    pub id: String,
    pub sender_name: String,
    pub sender_email: String,
    pub subject: String,
    pub message_content: String,
    /// RFC 3339 UTC timestamp stamped when the user submitted.
    pub submission_date_time: String,
}

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
