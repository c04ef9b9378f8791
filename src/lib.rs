// SPDX-License-Identifier: PMPL-1.0-or-later

//! iso639-mapgen — ISO 639-1 / ISO 639-2 lookup table generator.
//!
//! Reads an ISO 639-1 dataset (two-letter code → record with `639-2` and an
//! optional `639-2/B` code) and writes two static tables as source text:
//!
//! - `LANG_MAPPING_M2I_EXT`: two-letter → three-letter
//! - `LANG_MAPPING_I2M_EXT`: three-letter (terminological and bibliographic)
//!   → two-letter
//!
//! Output order follows the dataset order, so repeated runs are byte-identical.
//! When two records claim the same three-letter code, the reverse table lists
//! both and the later one wins; such collisions are reported, not fixed.

pub mod dataset;
pub mod error;
pub mod mapping;
pub mod render;
pub mod report;

pub use dataset::{Dataset, DatasetFormat, LanguageRecord};
pub use error::{MapgenError, Result};
pub use mapping::{Collision, Mappings};
pub use render::{OutputFormat, I2M_TABLE, M2I_TABLE};
pub use report::{generate, GenerationSummary};
