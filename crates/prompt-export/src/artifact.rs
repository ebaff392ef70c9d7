//! The prompt artifact and its builder.
//!
//! An [`Artifact`] is the JSON document the prompt runtime loads: a system
//! prompt, a template with `{{text}}` / `{{constraints}}` placeholders, a
//! handful of few-shot examples, generation parameters, and provenance.
//!
//! Everything except the name, the few-shots, and the dataset size is a
//! constant. The builder is a placeholder for a real prompt optimizer; it
//! only fixes the artifact shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ExportError, Result};

/// System prompt placed in every artifact.
pub const SYSTEM_PROMPT: &str = "You are a careful JA-EN translator optimized by DSPy.";

/// Prompt template. Placeholders are declared here and filled by the runtime.
pub const TEMPLATE: &str = "# Source\n{{text}}\n# Constraints\n{{constraints}}";

/// Maximum number of records turned into few-shot examples.
pub const MAX_FEW_SHOTS: usize = 2;

/// Path of the few-shot text inside each record.
pub const FEW_SHOT_FIELD: &str = "ja.text";
const FEW_SHOT_POINTER: &str = "/ja/text";

/// Fixed generation parameters.
pub const PARAMS: Params = Params {
    temperature: 0,
    max_output_tokens: 800,
};

/// Role of a few-shot message. Few-shots are example inputs only.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

/// A single few-shot example.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FewShot {
    pub role: Role,
    pub content: String,
}

impl FewShot {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Generation parameters passed through to the model call.
///
/// `temperature` is a whole number so it is written as `0`, not `0.0`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Params {
    pub temperature: u32,
    pub max_output_tokens: u32,
}

/// How the artifact was produced.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    /// Number of records loaded, not the number used as few-shots.
    pub dataset_size: usize,
}

/// The exported prompt artifact.
///
/// Field order here is the field order of the written JSON.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub name: String,
    pub system_prompt: String,
    pub template: String,
    pub few_shots: Vec<FewShot>,
    pub params: Params,
    pub provenance: Provenance,
}

/// Build the artifact for experiment `name` from loaded `records`.
///
/// Only the first [`MAX_FEW_SHOTS`] records are inspected. Each of them must
/// carry a string at `ja.text`; a record without one fails the build.
pub fn build(name: &str, records: &[Value]) -> Result<Artifact> {
    let few_shots = records
        .iter()
        .take(MAX_FEW_SHOTS)
        .enumerate()
        .map(|(index, record)| {
            record
                .pointer(FEW_SHOT_POINTER)
                .and_then(Value::as_str)
                .map(FewShot::user)
                .ok_or(ExportError::MissingField {
                    index,
                    field: FEW_SHOT_FIELD,
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Artifact {
        name: name.to_string(),
        system_prompt: SYSTEM_PROMPT.to_string(),
        template: TEMPLATE.to_string(),
        few_shots,
        params: PARAMS,
        provenance: Provenance {
            dataset_size: records.len(),
        },
    })
}
