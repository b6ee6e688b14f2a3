//! Generation task kinds and their sampling parameters.

use serde::{Deserialize, Serialize};

/// Each kind of request the workbench sends to the remote service.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GenerationTask {
    /// Numbered story outline
    Outline,
    /// Alternative treatments of a seed idea
    Treatments,
    /// Title, description, tags, hashtags
    Metadata,
    /// Beat expansion into narration
    Expand,
    /// Thumbnail concepts
    Thumbnails,
    /// Per-beat polish pass
    Polish,
    /// Final narration smoothing pass
    Finalize,
}

impl GenerationTask {
    /// Built-in parameters used when configuration does not override them.
    ///
    /// # Examples
    ///
    /// ```
    /// use vellum_core::GenerationTask;
    ///
    /// let params = GenerationTask::Outline.default_params();
    /// assert_eq!(*params.max_tokens(), 1400);
    /// ```
    pub fn default_params(&self) -> TaskParams {
        let (max_tokens, temperature) = match self {
            GenerationTask::Outline => (1400, 0.7),
            GenerationTask::Treatments => (1200, 0.9),
            GenerationTask::Metadata => (900, 0.7),
            GenerationTask::Expand => (1500, 0.75),
            GenerationTask::Thumbnails => (1500, 0.75),
            GenerationTask::Polish => (1500, 0.5),
            GenerationTask::Finalize => (1200, 0.4),
        };
        TaskParams {
            max_tokens,
            temperature,
        }
    }
}

/// Output length and randomness for one task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TaskParams {
    /// Maximum output tokens
    max_tokens: u32,
    /// Sampling temperature
    temperature: f32,
}

impl TaskParams {
    /// Create task parameters.
    pub fn new(max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens,
            temperature,
        }
    }
}
