// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GeoJSON export: polygon records back into a `FeatureCollection`.

use std::fs;
use std::path::Path;

use geojson::{Feature, FeatureCollection, Geometry, JsonObject};
use serde_json::json;

use crate::geometry;
use crate::models::{PolygonRecord, RecordCoordinates};

/// Errors from shape export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Failed to write file: {0}")]
    Io(String),

    #[error("Failed to serialize GeoJSON: {0}")]
    Serialize(String),
}

/// Convert records into a GeoJSON `FeatureCollection`.
///
/// Percent-space rings are converted back to geographic degrees and
/// closed. Single-ring records emit a `Polygon` geometry; multi-part
/// records emit a `MultiPolygon`.
pub fn to_feature_collection(records: &[PolygonRecord]) -> FeatureCollection {
    let features = records.iter().map(to_feature).collect();
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn to_feature(record: &PolygonRecord) -> Feature {
    let geometry = match &record.coordinates {
        RecordCoordinates::Single(ring) => {
            Geometry::new(geojson::Value::Polygon(vec![geographic_ring(ring)]))
        }
        RecordCoordinates::Multi(rings) => Geometry::new(geojson::Value::MultiPolygon(
            rings.iter().map(|ring| vec![geographic_ring(ring)]).collect(),
        )),
    };

    let mut properties = JsonObject::new();
    properties.insert("id".to_string(), json!(record.id));
    properties.insert("name".to_string(), json!(record.name));
    properties.insert("type".to_string(), json!(record.object_type));
    properties.insert("area".to_string(), json!(record.area));
    if let Some(population) = record.population {
        properties.insert("population".to_string(), json!(population));
    }
    properties.insert("status".to_string(), json!(record.status));
    properties.insert("color".to_string(), json!(record.color));
    properties.insert("segment".to_string(), json!(record.segment));
    // Attributes override the scalar fields on key collision.
    for (key, value) in &record.attributes {
        properties.insert(key.clone(), value.clone());
    }

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Convert a percent-space ring to closed geographic positions.
fn geographic_ring(ring: &[[f64; 2]]) -> Vec<Vec<f64>> {
    let mut positions: Vec<Vec<f64>> = geometry::percent_ring_to_geo(ring)
        .into_iter()
        .map(|c| vec![c.x, c.y])
        .collect();
    geometry::close_ring(&mut positions);
    positions
}

/// Serialize records and write them to `path` as pretty-printed GeoJSON.
///
/// This is the filesystem end of the download flow; the browser-facing
/// part is an external collaborator that just needs a document and a
/// filename.
pub fn write_geojson_file<P: AsRef<Path>>(
    records: &[PolygonRecord],
    path: P,
) -> Result<(), ExportError> {
    let collection = to_feature_collection(records);
    let document = serde_json::to_string_pretty(&collection)
        .map_err(|e| ExportError::Serialize(e.to_string()))?;
    fs::write(path.as_ref(), document).map_err(|e| ExportError::Io(e.to_string()))?;
    tracing::info!(
        count = records.len(),
        path = %path.as_ref().display(),
        "Exported GeoJSON"
    );
    Ok(())
}

/// Default export filename, dated: `geoportal_export_YYYY-MM-DD.geojson`.
pub fn default_filename() -> String {
    format!(
        "geoportal_export_{}.geojson",
        chrono::Utc::now().format("%Y-%m-%d")
    )
}
