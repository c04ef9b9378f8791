// SPDX-License-Identifier: PMPL-1.0-or-later

//! Directional code mappings derived from a dataset.
//!
//! Both mappings are ordered pair sequences in the exact order the generated
//! tables list them. `ThreeToTwo` may list the same key twice when two
//! records claim the same three-letter code; consumers of the generated
//! object literal see the later entry, and so do the lookups here.

use crate::dataset::Dataset;
use crate::error::Result;
use std::collections::HashMap;
use std::iter;

/// `(alpha2, alpha3)` pairs, one per record, in dataset order.
pub fn two_to_three(dataset: &Dataset) -> impl Iterator<Item = Result<(&str, &str)>> {
    dataset
        .records()
        .iter()
        .map(|record| record.alpha3().map(|alpha3| (record.alpha2(), alpha3)))
}

/// `(alpha3, alpha2)` pairs: the primary code of each record, followed by its
/// bibliographic code when it has one.
pub fn three_to_two(dataset: &Dataset) -> impl Iterator<Item = Result<(&str, &str)>> {
    dataset.records().iter().flat_map(|record| {
        let primary = record.alpha3().map(|alpha3| (alpha3, record.alpha2()));
        let bibliographic = match (&primary, record.alpha3_bibliographic()) {
            (Ok(_), Some(code)) => Some(Ok((code, record.alpha2()))),
            _ => None,
        };
        iter::once(primary).chain(bibliographic)
    })
}

/// A `ThreeToTwo` key that a later entry rebound to a different language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision<'a> {
    pub alpha3: &'a str,
    pub previous: &'a str,
    pub replacement: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mappings<'a> {
    two_to_three: Vec<(&'a str, &'a str)>,
    three_to_two: Vec<(&'a str, &'a str)>,
}

impl<'a> Mappings<'a> {
    pub fn derive(dataset: &'a Dataset) -> Result<Self> {
        Ok(Self {
            two_to_three: two_to_three(dataset).collect::<Result<_>>()?,
            three_to_two: three_to_two(dataset).collect::<Result<_>>()?,
        })
    }

    pub fn two_to_three(&self) -> &[(&'a str, &'a str)] {
        &self.two_to_three
    }

    pub fn three_to_two(&self) -> &[(&'a str, &'a str)] {
        &self.three_to_two
    }

    pub fn alpha3_for(&self, alpha2: &str) -> Option<&'a str> {
        self.two_to_three
            .iter()
            .find(|(key, _)| *key == alpha2)
            .map(|(_, value)| *value)
    }

    /// Last write wins, matching what the generated literal evaluates to.
    pub fn alpha2_for(&self, alpha3: &str) -> Option<&'a str> {
        self.three_to_two
            .iter()
            .rev()
            .find(|(key, _)| *key == alpha3)
            .map(|(_, value)| *value)
    }

    /// Every overwrite in `ThreeToTwo`, in the order it happens.
    pub fn collisions(&self) -> Vec<Collision<'a>> {
        let mut bound: HashMap<&'a str, &'a str> = HashMap::new();
        let mut collisions = Vec::new();
        for &(alpha3, alpha2) in &self.three_to_two {
            if let Some(previous) = bound.insert(alpha3, alpha2) {
                if previous != alpha2 {
                    collisions.push(Collision {
                        alpha3,
                        previous,
                        replacement: alpha2,
                    });
                }
            }
        }
        collisions
    }
}
