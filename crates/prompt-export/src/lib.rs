//! Export JSONL translation datasets as prompt artifacts.
//!
//! A prompt artifact is the JSON document a prompt runtime loads to drive a
//! translation model: system prompt, template, few-shot examples, generation
//! parameters, and provenance. This crate reads a dataset, picks the first
//! records as few-shots, and writes the artifact. It does not search or
//! score prompts; it fixes the artifact shape for an optimizer to fill in
//! later.
//!
//! ```ignore
//! use prompt_export::{ExportConfig, run};
//!
//! let config = ExportConfig::new("data/train.jsonl", "artifacts/translator.json");
//! let artifact = run(&config)?;
//! println!("{} few-shots", artifact.few_shots.len());
//! ```
//!
//! The two core steps are also usable on their own: [`dataset::load`] reads
//! records and [`artifact::build`] turns them into an [`Artifact`].

pub mod artifact;
pub mod dataset;
pub mod error;
pub mod export;

pub use artifact::{Artifact, FewShot, Params, Provenance, Role, build};
pub use dataset::load;
pub use error::{ExportError, Result};
pub use export::{DEFAULT_EXPERIMENT, ExportConfig, run, write_artifact};
