// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Land-parcel polygon record and its coordinate representation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One polygon ring in percent space, stored as `[x, y]` pairs.
pub type PercentRing = Vec<[f64; 2]>;

/// Ring storage for a record: a single outer ring for simple shapes, or
/// one outer ring per part for multi-part shapes.
///
/// Serialized untagged so single-ring records keep the flat array shape
/// the persistence API has always stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordCoordinates {
    /// One outer ring.
    Single(PercentRing),
    /// One outer ring per part of a multi-part shape.
    Multi(Vec<PercentRing>),
}

impl RecordCoordinates {
    /// All outer rings; a single-ring shape yields one entry.
    pub fn rings(&self) -> Vec<&PercentRing> {
        match self {
            Self::Single(ring) => vec![ring],
            Self::Multi(rings) => rings.iter().collect(),
        }
    }

    /// The first outer ring, if any.
    pub fn first_ring(&self) -> Option<&PercentRing> {
        match self {
            Self::Single(ring) => Some(ring),
            Self::Multi(rings) => rings.first(),
        }
    }

    /// Number of parts in the shape.
    pub fn part_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multi(rings) => rings.len(),
        }
    }
}

/// One land-parcel shape with its metadata and open attribute set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolygonRecord {
    /// Opaque unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text classification label
    #[serde(rename = "type")]
    pub object_type: String,
    /// Area in square meters, never below the 0.01 m² floor
    pub area: f64,
    /// Population figure from the source properties, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    /// Workflow status label
    pub status: String,
    /// Outer ring(s) in percent space
    pub coordinates: RecordCoordinates,
    /// Display color (hex); not used in area computation
    pub color: String,
    /// Comma-joined set of free-text segment tags
    pub segment: String,
    /// Open-schema attributes driven by externally configured templates
    pub attributes: Map<String, Value>,
}

impl PolygonRecord {
    /// Iterate the record's segment tags, trimmed, skipping empty entries.
    pub fn segment_tags(&self) -> impl Iterator<Item = &str> {
        self.segment
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}
