// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shape import service: GeoJSON and KML documents into polygon records.

use std::fs;
use std::path::Path;

use geo::Coord;
use geojson::{Feature, GeoJson};
use rand::distr::Alphanumeric;
use rand::Rng;
use serde_json::{json, Map, Value};

use crate::config::ImportConfig;
use crate::geometry;
use crate::models::{PercentRing, PolygonRecord, RecordCoordinates};
use crate::services::area;
use crate::services::kml;

/// Supported import formats, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeFormat {
    GeoJson,
    Kml,
}

impl ShapeFormat {
    /// Detect the format from a file path: `.geojson`/`.json` is GeoJSON,
    /// `.kml` is KML, anything else is unsupported.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ImportError> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "geojson" | "json" => Ok(Self::GeoJson),
            "kml" => Ok(Self::Kml),
            other => Err(ImportError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Errors from shape import.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Failed to read file: {0}")]
    Io(String),

    #[error("Invalid document: {0}")]
    Format(String),

    #[error("No polygonal shapes (Polygon or MultiPolygon) found in the document")]
    EmptyResult,

    #[error("Unsupported file format: \".{0}\" (supported: .geojson, .json, .kml)")]
    UnsupportedFormat(String),
}

/// Service converting uploaded GeoJSON/KML documents into polygon records.
///
/// Parsing is single-pass and stateless; either the whole document imports
/// or the operation fails with no partial records.
#[derive(Debug, Clone, Default)]
pub struct ShapeImporter {
    config: ImportConfig,
}

impl ShapeImporter {
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Import a file, detecting the format from its extension.
    pub fn import_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<PolygonRecord>, ImportError> {
        let path = path.as_ref();
        let format = ShapeFormat::from_path(path)?;
        let text = fs::read_to_string(path).map_err(|e| ImportError::Io(e.to_string()))?;
        self.import_str(&text, format)
    }

    /// Import a document already read into memory.
    pub fn import_str(
        &self,
        text: &str,
        format: ShapeFormat,
    ) -> Result<Vec<PolygonRecord>, ImportError> {
        match format {
            ShapeFormat::GeoJson => self.import_geojson(text),
            ShapeFormat::Kml => self.import_kml(text),
        }
    }

    /// Import GeoJSON text.
    ///
    /// Accepts a `FeatureCollection` or a single `Feature`. Only `Polygon`
    /// and `MultiPolygon` geometries are imported; other geometry types
    /// are skipped. Interior rings are dropped. Fails with
    /// [`ImportError::EmptyResult`] when nothing importable remains.
    pub fn import_geojson(&self, text: &str) -> Result<Vec<PolygonRecord>, ImportError> {
        let geojson: GeoJson = text
            .parse()
            .map_err(|e: geojson::Error| ImportError::Format(format!("Invalid GeoJSON: {}", e)))?;

        let features: Vec<Feature> = match geojson {
            GeoJson::FeatureCollection(collection) => collection.features,
            GeoJson::Feature(feature) => {
                if feature.geometry.is_none() {
                    return Err(ImportError::Format(
                        "Feature is missing \"geometry\"".to_string(),
                    ));
                }
                vec![feature]
            }
            GeoJson::Geometry(_) => Vec::new(),
        };

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for (index, feature) in features.into_iter().enumerate() {
            let Some(geom) = feature.geometry else {
                skipped += 1;
                continue;
            };
            let properties = feature.properties.unwrap_or_default();

            let is_multi = matches!(geom.value, geojson::Value::MultiPolygon(_));
            let outer_rings: Vec<Vec<Coord<f64>>> = match geom.value {
                geojson::Value::Polygon(rings) => {
                    rings.into_iter().take(1).map(positions_to_coords).collect()
                }
                geojson::Value::MultiPolygon(parts) => parts
                    .into_iter()
                    .filter_map(|rings| rings.into_iter().next())
                    .map(positions_to_coords)
                    .collect(),
                other => {
                    skipped += 1;
                    tracing::debug!(
                        feature = index,
                        geometry_type = geometry_type_name(&other),
                        "Skipping non-polygonal geometry"
                    );
                    continue;
                }
            };

            // Outer rings that cannot form a polygon are dropped.
            let outer_rings: Vec<Vec<Coord<f64>>> = outer_rings
                .into_iter()
                .filter(|ring| ring.len() >= 3)
                .collect();
            if outer_rings.is_empty() {
                skipped += 1;
                continue;
            }

            // The calculated area always wins over the file's own claim;
            // the claim is kept in the attributes as provenance.
            let area = outer_rings
                .iter()
                .filter_map(|ring| area::geo_ring_area_m2(ring))
                .sum::<f64>()
                .max(area::MIN_AREA_M2);

            let mut normalized: Vec<PercentRing> = outer_rings
                .iter()
                .map(|ring| geometry::geo_ring_to_percent(ring))
                .collect();
            let parts_count = normalized.len();
            let coordinates = if parts_count == 1 {
                RecordCoordinates::Single(normalized.remove(0))
            } else {
                RecordCoordinates::Multi(normalized)
            };

            let original_area = properties.get("area").cloned().unwrap_or(Value::Null);
            let mut attributes = properties.clone();
            attributes.insert("isMultiPolygon".to_string(), Value::Bool(is_multi));
            attributes.insert("partsCount".to_string(), json!(parts_count));
            attributes.insert("originalArea".to_string(), original_area);

            records.push(PolygonRecord {
                id: generate_record_id("imported", index),
                name: string_property(&properties, &["name", "title"])
                    .unwrap_or_else(|| format!("Object {}", index + 1)),
                object_type: string_property(&properties, &["type", "category"])
                    .unwrap_or_else(|| self.config.default_type.clone()),
                area,
                population: number_property(&properties, &["population", "pop"]),
                status: string_property(&properties, &["status"])
                    .unwrap_or_else(|| self.config.default_status.clone()),
                coordinates,
                color: self.config.color_for(index),
                segment: self.config.geojson_segment.clone(),
                attributes,
            });
        }

        if records.is_empty() {
            return Err(ImportError::EmptyResult);
        }

        tracing::info!(count = records.len(), skipped, "Imported GeoJSON shapes");
        Ok(records)
    }

    /// Import KML text.
    ///
    /// Each polygon outer boundary in the document becomes one record;
    /// `MultiGeometry` wrappers are traversed the same way as direct
    /// polygon children.
    pub fn import_kml(&self, text: &str) -> Result<Vec<PolygonRecord>, ImportError> {
        let shapes = kml::parse_kml(text)?;

        let mut records = Vec::new();
        for (index, shape) in shapes.into_iter().enumerate() {
            let area = area::geo_ring_area_m2(&shape.ring).unwrap_or(area::MIN_AREA_M2);
            let normalized = geometry::geo_ring_to_percent(&shape.ring);

            let mut attributes = shape.properties.clone();
            attributes.insert(
                "description".to_string(),
                Value::String(shape.description.clone().unwrap_or_default()),
            );
            attributes.insert("source".to_string(), Value::String("KML".to_string()));

            records.push(PolygonRecord {
                id: generate_record_id("kml", index),
                name: shape
                    .name
                    .clone()
                    .unwrap_or_else(|| "Unnamed object".to_string()),
                object_type: string_property(&shape.properties, &["type", "category"])
                    .unwrap_or_else(|| self.config.kml_type.clone()),
                area,
                population: number_property(&shape.properties, &["population"]),
                status: string_property(&shape.properties, &["status"])
                    .unwrap_or_else(|| self.config.default_status.clone()),
                coordinates: RecordCoordinates::Single(normalized),
                color: self.config.color_for(index),
                segment: self.config.kml_segment.clone(),
                attributes,
            });
        }

        if records.is_empty() {
            return Err(ImportError::EmptyResult);
        }

        tracing::info!(count = records.len(), "Imported KML shapes");
        Ok(records)
    }
}

fn geometry_type_name(value: &geojson::Value) -> &'static str {
    match value {
        geojson::Value::Point(_) => "Point",
        geojson::Value::MultiPoint(_) => "MultiPoint",
        geojson::Value::LineString(_) => "LineString",
        geojson::Value::MultiLineString(_) => "MultiLineString",
        geojson::Value::Polygon(_) => "Polygon",
        geojson::Value::MultiPolygon(_) => "MultiPolygon",
        geojson::Value::GeometryCollection(_) => "GeometryCollection",
    }
}

/// Convert GeoJSON ring positions to geographic coordinates. Positions
/// are `[lng, lat, ...]`; elevation and beyond are ignored.
fn positions_to_coords(ring: Vec<Vec<f64>>) -> Vec<Coord<f64>> {
    ring.into_iter()
        .filter_map(|position| match (position.first(), position.get(1)) {
            (Some(&lng), Some(&lat)) => Some(Coord { x: lng, y: lat }),
            _ => None,
        })
        .collect()
}

/// First string value among the given property keys.
fn string_property(properties: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| properties.get(*key))
        .find_map(|value| value.as_str())
        .map(str::to_string)
}

/// First numeric value among the given property keys. Accepts JSON
/// numbers and numeric strings (KML attributes arrive as text).
fn number_property(properties: &Map<String, Value>, keys: &[&str]) -> Option<u64> {
    keys.iter()
        .filter_map(|key| properties.get(*key))
        .find_map(|value| match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
}

/// Generate an opaque record id: prefix, millisecond timestamp, position
/// in the document, and a short random suffix.
fn generate_record_id(prefix: &str, index: usize) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(9)
        .map(char::from)
        .collect();
    format!("{}-{}-{}-{}", prefix, millis, index, suffix)
}
