use std::path::Path;

use serde::{Deserialize, Serialize};

use super::sample::Sample;
use crate::error::SamplesError;

// ---------------------------------------------------------------------------
// Bunch – the raw dataset container
// ---------------------------------------------------------------------------

/// A loosely structured dataset: one feature row and one class index per
/// sample, plus optional display names for features and classes.
///
/// This mirrors the shape of the `Bunch` objects returned by the usual
/// dataset loaders (`load_iris()`, `load_wine()`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bunch {
    pub data: Vec<Vec<f64>>,
    pub target: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_names: Option<Vec<String>>,
}

impl Bunch {
    /// Load a bunch from a `.json`, `.csv` or `.parquet` file.
    pub fn from_file(path: &Path) -> anyhow::Result<Bunch> {
        super::loader::load_file(path)
    }

    /// Display name of class index `class_index`.
    ///
    /// Falls back to the stringified index when there are no target names
    /// or the index is outside them.
    pub fn class_name(&self, class_index: i64) -> String {
        usize::try_from(class_index)
            .ok()
            .and_then(|i| self.target_names.as_ref()?.get(i))
            .cloned()
            .unwrap_or_else(|| class_index.to_string())
    }

    /// Turn every row into a [`Sample`], in row order.
    pub fn to_samples(&self) -> Result<Vec<Sample>, SamplesError> {
        let attribute_names = self.feature_names.clone().unwrap_or_default();
        self.target
            .iter()
            .enumerate()
            .map(|(index, &class_index)| {
                let attributes = self
                    .data
                    .get(index)
                    .ok_or(SamplesError::MissingRow { index })?;
                Ok(Sample::new(
                    self.class_name(class_index),
                    attribute_names.clone(),
                    attributes.clone(),
                ))
            })
            .collect()
    }

    /// Number of rows (one per target entry).
    pub fn len(&self) -> usize {
        self.target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }
}
