//! Project template types.

use serde::{Deserialize, Serialize};
use strum::VariantNames;

/// Which starter template a new project receives.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use vellum_core::ProjectType;
///
/// assert_eq!(ProjectType::from_str("novel").unwrap(), ProjectType::Novel);
/// assert!(ProjectType::from_str("podcast").is_err());
/// assert_eq!(ProjectType::valid_choices(), "shrouded, aperture, novel");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::VariantNames,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Documentary-investigative episode
    #[default]
    Shrouded,
    /// Image-driven liminal video
    Aperture,
    /// Long-form fiction
    Novel,
}

impl ProjectType {
    /// Comma-separated list of accepted names, for error messages.
    pub fn valid_choices() -> String {
        Self::VARIANTS.join(", ")
    }
}
