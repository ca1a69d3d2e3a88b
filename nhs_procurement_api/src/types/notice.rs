//! Procurement notice records and the label values used to filter them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single procurement notice as returned by `/api/search`.
///
/// The server does not guarantee a schema, so the record is kept as the raw
/// JSON value and serializes back unchanged (for example when passed to
/// [`Client::export`](crate::Client::export)). Records are normally objects;
/// anything else is carried through as-is and the accessors return `None`.
/// The accessors cover the fields conventionally present on every notice.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct Notice(pub Value);

impl Notice {
    /// Raw value for `key`, if the record is an object holding it.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.as_object().and_then(|map| map.get(key))
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.get_str("title")
    }

    /// Name of the buying organisation.
    pub fn organisation_name(&self) -> Option<&str> {
        self.get_str("organisationName")
    }

    pub fn notice_status(&self) -> Option<&str> {
        self.get_str("noticeStatus")
    }

    /// Response deadline as sent by the server (not parsed).
    pub fn deadline_date(&self) -> Option<&str> {
        self.get_str("deadlineDate")
    }

    /// Link to the notice on its source portal.
    pub fn link(&self) -> Option<&str> {
        self.get_str("link")
    }
}

impl From<Map<String, Value>> for Notice {
    fn from(map: Map<String, Value>) -> Self {
        Notice(Value::Object(map))
    }
}

impl From<Value> for Notice {
    fn from(value: Value) -> Self {
        Notice(value)
    }
}

/// Kind of notice.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeType {
    Contract,
    Opportunity,
}
impl std::fmt::Display for NoticeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                NoticeType::Contract => "Contract",
                NoticeType::Opportunity => "Opportunity",
            }
        )
    }
}

/// Publication status of a notice.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeStatus {
    Open,
    Closed,
    Awarded,
}
impl std::fmt::Display for NoticeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                NoticeStatus::Open => "Open",
                NoticeStatus::Closed => "Closed",
                NoticeStatus::Awarded => "Awarded",
            }
        )
    }
}

/// Portal a notice was published on.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeSource {
    /// Contracts Finder.
    #[serde(rename = "CF")]
    ContractsFinder,

    /// Find a Tender Service.
    #[serde(rename = "FTS")]
    FindATender,
}
impl std::fmt::Display for NoticeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                NoticeSource::ContractsFinder => "CF",
                NoticeSource::FindATender => "FTS",
            }
        )
    }
}
