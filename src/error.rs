// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for loading datasets and rendering tables

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MapgenError>;

#[derive(Debug, Error)]
pub enum MapgenError {
    /// The dataset could not be opened, read or parsed.
    #[error("failed to load dataset {}: {source}", .path.display())]
    DataLoad {
        path: PathBuf,
        #[source]
        source: LoadSource,
    },

    /// A record is missing a field the tables need.
    #[error("record '{alpha2}' has no '{field}' field")]
    Schema { alpha2: String, field: &'static str },

    #[error("failed to write generated tables: {0}")]
    Write(#[from] io::Error),
}

/// Underlying cause of a [`MapgenError::DataLoad`].
#[derive(Debug, Error)]
pub enum LoadSource {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl MapgenError {
    pub(crate) fn data_load(path: impl Into<PathBuf>, source: impl Into<LoadSource>) -> Self {
        MapgenError::DataLoad {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn is_data_load(&self) -> bool {
        matches!(self, MapgenError::DataLoad { .. })
    }

    pub fn is_schema(&self) -> bool {
        matches!(self, MapgenError::Schema { .. })
    }
}
