use std::io::Read;
use std::path::Path;

use serde_json::Value;

use super::service::AssessmentRequest;

/// Errors raised while loading a vision export from disk. The triage core
/// itself never fails; only this structural boundary does.
#[derive(Debug, thiserror::Error)]
pub enum VisionExportError {
    #[error("failed to read vision export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid vision export JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported vision export shape: {0}")]
    Shape(&'static str),
}

/// Loads vision-model exports for the CLI and tests.
///
/// Two shapes are accepted: a bare array of candidate observations, or an
/// object carrying `observations` plus an optional `narrative` string.
pub struct VisionExportImporter;

impl VisionExportImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AssessmentRequest, VisionExportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<AssessmentRequest, VisionExportError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<AssessmentRequest, VisionExportError> {
        match value {
            Value::Array(observations) => Ok(AssessmentRequest {
                observations,
                narrative: None,
            }),
            Value::Object(mut fields) => {
                let observations = match fields.remove("observations") {
                    Some(Value::Array(observations)) => observations,
                    Some(_) => {
                        return Err(VisionExportError::Shape("observations must be an array"))
                    }
                    None => return Err(VisionExportError::Shape("missing observations array")),
                };
                let narrative = fields
                    .remove("narrative")
                    .as_ref()
                    .and_then(Value::as_str)
                    .map(str::to_string);

                Ok(AssessmentRequest {
                    observations,
                    narrative,
                })
            }
            _ => Err(VisionExportError::Shape(
                "expected an observation array or an export object",
            )),
        }
    }
}
