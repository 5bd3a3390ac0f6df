//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Draft Types** - Dataset metadata edited by the form
//! - **Status Types** - Upload lifecycle
//! - **File Types** - Selected file abstraction
//! - **API Types** - Backend request/response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Draft Types
// =============================================================================

/// License attached to a published dataset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum License {
    #[default]
    #[serde(rename = "CC-BY-4.0")]
    CcBy4,
    #[serde(rename = "CC-BY-SA-4.0")]
    CcBySa4,
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
}

impl License {
    /// All licenses, in the order the picker lists them.
    pub const ALL: [License; 4] = [
        License::CcBy4,
        License::CcBySa4,
        License::Mit,
        License::Apache2,
    ];

    /// SPDX-style identifier sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            License::CcBy4 => "CC-BY-4.0",
            License::CcBySa4 => "CC-BY-SA-4.0",
            License::Mit => "MIT",
            License::Apache2 => "Apache-2.0",
        }
    }

    /// Label shown in the picker.
    pub fn label(&self) -> &'static str {
        match self {
            License::CcBy4 => "CC BY 4.0",
            License::CcBySa4 => "CC BY-SA 4.0",
            License::Mit => "MIT",
            License::Apache2 => "Apache 2.0",
        }
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for License {
    type Err = PublishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        License::ALL
            .into_iter()
            .find(|license| license.as_str() == s)
            .ok_or_else(|| PublishError::InvalidValue {
                field: "license",
                value: s.to_string(),
            })
    }
}

/// Access tier of a published dataset. Enforced by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Private,
    Public,
    Shared,
}

impl Visibility {
    /// All visibility tiers, in the order the picker lists them.
    pub const ALL: [Visibility; 3] = [Visibility::Private, Visibility::Public, Visibility::Shared];

    /// Value sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Public => "public",
            Visibility::Shared => "shared",
        }
    }

    /// Label shown in the picker.
    pub fn label(&self) -> &'static str {
        match self {
            Visibility::Private => "Private",
            Visibility::Public => "Public",
            Visibility::Shared => "Shared",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = PublishError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Visibility::ALL
            .into_iter()
            .find(|visibility| visibility.as_str() == s)
            .ok_or_else(|| PublishError::InvalidValue {
                field: "visibility",
                value: s.to_string(),
            })
    }
}

/// In-progress dataset metadata held by the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatasetDraft {
    pub name: String,
    pub description: String,
    pub license: License,
    pub visibility: Visibility,
}

impl DatasetDraft {
    /// Multipart text fields, in the order they are appended after `file`.
    pub fn form_fields(&self) -> [(&'static str, String); 4] {
        [
            ("name", self.name.clone()),
            ("description", self.description.clone()),
            ("license", self.license.as_str().to_string()),
            ("visibility", self.visibility.as_str().to_string()),
        ]
    }
}

/// Editable draft field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Description,
    License,
    Visibility,
}

// =============================================================================
// Status Types
// =============================================================================

/// Dataset upload lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

impl UploadStatus {
    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadStatus::Uploading)
    }
}

// =============================================================================
// File Types
// =============================================================================

/// A user-selected local file.
///
/// Implemented for `web_sys::File`; tests provide their own handle.
pub trait FileHandle: Clone {
    /// File name including extension.
    fn file_name(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> f64;
}

impl FileHandle for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn size(&self) -> f64 {
        web_sys::Blob::size(self)
    }
}

/// Strip the final extension from a file name.
///
/// Only a trailing `.ext` where `ext` is non-empty and holds no `.` or `/`
/// is removed, so `archive.` and `dir.d/file` are kept whole.
pub fn strip_extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => {
            let ext = &file_name[idx + 1..];
            if ext.is_empty() || ext.contains('/') {
                file_name
            } else {
                &file_name[..idx]
            }
        }
        None => file_name,
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Body of the generate-link request.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLinkRequest {
    pub dataset_id: String,
}

/// Response from the generate-link endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateLinkResponse {
    /// Link granting unauthenticated access to the dataset
    pub shareable_link: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend publishing errors.
#[derive(Debug, Error)]
pub enum PublishError {
    /// Request payload could not be built.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// Transport failure, no response received.
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered outside the 2xx range.
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// Response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Clipboard unavailable or write rejected.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Picker value outside the known set.
    #[error("Invalid {field} value: {value}")]
    InvalidValue { field: &'static str, value: String },
}

/// Result type alias for frontend operations.
pub type PublishResult<T> = Result<T, PublishError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("ocean-temps.v2.csv"), "ocean-temps.v2");
        assert_eq!(strip_extension("reads.fastq"), "reads");
        assert_eq!(strip_extension("README"), "README");
        assert_eq!(strip_extension("archive."), "archive.");
        assert_eq!(strip_extension(".env"), "");
        assert_eq!(strip_extension("dir.d/file"), "dir.d/file");
    }

    #[test]
    fn test_draft_defaults() {
        let draft = DatasetDraft::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.description, "");
        assert_eq!(draft.license.as_str(), "CC-BY-4.0");
        assert_eq!(draft.visibility.as_str(), "private");
    }

    #[test]
    fn test_form_fields_order_and_values() {
        let draft = DatasetDraft {
            name: "ocean-temps.v2".to_string(),
            description: "Buoy readings".to_string(),
            ..Default::default()
        };

        let fields = draft.form_fields();
        let names: Vec<_> = fields.iter().map(|(k, _)| *k).collect();
        assert_eq!(names, ["name", "description", "license", "visibility"]);
        assert_eq!(fields[2], ("license", "CC-BY-4.0".to_string()));
        assert_eq!(fields[3], ("visibility", "private".to_string()));
    }

    #[test]
    fn test_license_parse() {
        for license in License::ALL {
            assert_eq!(license.as_str().parse::<License>().unwrap(), license);
        }
        assert!("GPL-3.0".parse::<License>().is_err());
    }

    #[test]
    fn test_visibility_parse() {
        assert_eq!("shared".parse::<Visibility>().unwrap(), Visibility::Shared);
        assert!("Public".parse::<Visibility>().is_err());
    }

    #[test]
    fn test_serde_wire_values() {
        assert_eq!(serde_json::to_string(&License::CcBySa4).unwrap(), r#""CC-BY-SA-4.0""#);
        assert_eq!(serde_json::to_string(&Visibility::Public).unwrap(), r#""public""#);
    }

    #[test]
    fn test_generate_link_shapes() {
        let body = serde_json::to_value(GenerateLinkRequest {
            dataset_id: "example-dataset-id".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "datasetId": "example-dataset-id" }));

        let response: GenerateLinkResponse =
            serde_json::from_str(r#"{"shareableLink": "https://share.example/abc"}"#).unwrap();
        assert_eq!(response.shareable_link, "https://share.example/abc");
    }

    #[test]
    fn test_error_display() {
        let err = PublishError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Server error (500): boom");
    }
}
