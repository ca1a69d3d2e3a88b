//! Export formats and the payloads `/api/export` returns for them.

use std::borrow::Cow;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::AsyncWriteExt;

use crate::Error;

/// Target file representation for an export.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Binary spreadsheet. This is the default.
    #[default]
    Excel,
    Csv,
    Json,
}

impl ExportFormat {
    /// Conventional file extension for this format.
    pub fn file_extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ExportFormat::Excel => "excel",
                ExportFormat::Csv => "csv",
                ExportFormat::Json => "json",
            }
        )
    }
}

impl FromStr for ExportFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excel" => Ok(ExportFormat::Excel),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(()),
        }
    }
}

/// Exported data in the representation its format implies: decoded JSON for
/// [`ExportFormat::Json`], the untouched response bytes otherwise.
#[derive(Clone, Debug, PartialEq)]
pub enum ExportPayload {
    Binary(Vec<u8>),
    Json(Value),
}

impl ExportPayload {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ExportPayload::Binary(bytes) => Some(bytes),
            ExportPayload::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ExportPayload::Json(value) => Some(value),
            ExportPayload::Binary(_) => None,
        }
    }

    /// Writes the payload to `path`, creating or truncating the file.
    ///
    /// JSON is written pretty-printed with 2-space indentation; binary
    /// payloads are written byte for byte. The file is flushed before
    /// returning and closed on every exit path. A failed write may leave
    /// partial content behind.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let contents: Cow<'_, [u8]> = match self {
            ExportPayload::Json(value) => Cow::Owned(
                serde_json::to_vec_pretty(value).map_err(std::io::Error::from)?,
            ),
            ExportPayload::Binary(bytes) => Cow::Borrowed(bytes.as_slice()),
        };

        let mut file = tokio::fs::File::create(path).await.map_err(|e| {
            tracing::error!("Failed to create {}: {}", path.display(), e);
            e
        })?;
        file.write_all(&contents).await?;
        file.flush().await?;

        tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_wire_names() {
        assert_eq!(serde_json::to_value(ExportFormat::Excel).unwrap(), json!("excel"));
        assert_eq!(serde_json::to_value(ExportFormat::Csv).unwrap(), json!("csv"));
        assert_eq!(serde_json::to_value(ExportFormat::Json).unwrap(), json!("json"));
        assert_eq!(ExportFormat::default(), ExportFormat::Excel);
    }

    #[test]
    fn format_parse_and_display() {
        for format in [ExportFormat::Excel, ExportFormat::Csv, ExportFormat::Json] {
            assert_eq!(format.to_string().parse::<ExportFormat>(), Ok(format));
        }
        assert!("xlsx".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::Excel.file_extension(), "xlsx");
    }

    #[test]
    fn payload_accessors() {
        let binary = ExportPayload::Binary(vec![0x50, 0x4b, 0x03, 0x04]);
        assert_eq!(binary.as_bytes(), Some(&[0x50, 0x4b, 0x03, 0x04][..]));
        assert!(binary.as_json().is_none());

        let value = ExportPayload::Json(json!({"a": 1}));
        assert_eq!(value.as_json(), Some(&json!({"a": 1})));
        assert!(value.as_bytes().is_none());
    }

    #[tokio::test]
    async fn save_json_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        ExportPayload::Json(json!({"a": 1, "b": [true]}))
            .save(&path)
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"a\": 1,\n  \"b\": [\n    true\n  ]\n}");
    }

    #[tokio::test]
    async fn save_binary_is_byte_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");
        let bytes: Vec<u8> = vec![0x00, 0xff, b'\r', b'\n', 0x80, b'\n'];

        ExportPayload::Binary(bytes.clone()).save(&path).await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[tokio::test]
    async fn save_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");

        let result = ExportPayload::Binary(b"a,b\n".to_vec()).save(&path).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
