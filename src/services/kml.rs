// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! KML document parsing.
//!
//! Extracts polygon outer boundaries and placemark metadata from KML.
//! Direct `Polygon` children and `MultiGeometry`-wrapped polygons are
//! traversed uniformly; each polygon element yields exactly one shape.

use geo::Coord;
use roxmltree::{Document, Node};
use serde_json::{Map, Value};

use crate::services::import::ImportError;

/// One polygon extracted from a KML placemark, before record conversion.
#[derive(Debug, Clone)]
pub(crate) struct KmlShape {
    /// Placemark `<name>` text, if present.
    pub name: Option<String>,
    /// Placemark `<description>` text, if present.
    pub description: Option<String>,
    /// `ExtendedData/Data[name]` + `value` pairs.
    pub properties: Map<String, Value>,
    /// Geographic outer ring, at least 3 valid points.
    pub ring: Vec<Coord<f64>>,
}

/// Parse a KML document into its polygon shapes.
///
/// Rings keep the order and closure of the source coordinate text.
/// Malformed coordinate tuples are dropped; rings left with fewer than 3
/// valid points are dropped entirely.
pub(crate) fn parse_kml(text: &str) -> Result<Vec<KmlShape>, ImportError> {
    let doc = Document::parse(text)
        .map_err(|e| ImportError::Format(format!("Invalid KML: {}", e)))?;

    let mut shapes = Vec::new();

    for (placemark_index, placemark) in doc
        .descendants()
        .filter(|n| n.has_tag_name("Placemark"))
        .enumerate()
    {
        let name = descendant_text(placemark, "name");
        let description = descendant_text(placemark, "description");
        let properties = extended_data(placemark);

        for polygon in placemark
            .descendants()
            .filter(|n| n.has_tag_name("Polygon"))
        {
            let Some(coords_text) = outer_boundary_text(polygon) else {
                continue;
            };
            let ring = parse_coordinates(&coords_text);
            if ring.len() < 3 {
                tracing::debug!(
                    placemark = placemark_index,
                    points = ring.len(),
                    "Dropping ring with fewer than 3 valid points"
                );
                continue;
            }
            shapes.push(KmlShape {
                name: name.clone(),
                description: description.clone(),
                properties: properties.clone(),
                ring,
            });
        }
    }

    Ok(shapes)
}

/// Text of the first descendant element with the given tag name.
fn descendant_text(node: Node, tag: &str) -> Option<String> {
    node.descendants()
        .find(|n| n.has_tag_name(tag))
        .and_then(|n| n.text())
        .map(str::to_string)
}

/// Collect `ExtendedData` name/value pairs into a properties map.
fn extended_data(placemark: Node) -> Map<String, Value> {
    let mut properties = Map::new();
    if let Some(extended) = placemark
        .descendants()
        .find(|n| n.has_tag_name("ExtendedData"))
    {
        for data in extended.descendants().filter(|n| n.has_tag_name("Data")) {
            let Some(key) = data.attribute("name") else {
                continue;
            };
            let value = data
                .descendants()
                .find(|n| n.has_tag_name("value"))
                .and_then(|n| n.text());
            if let Some(value) = value {
                properties.insert(key.to_string(), Value::String(value.to_string()));
            }
        }
    }
    properties
}

/// Coordinate text of a polygon's outer boundary, if present.
fn outer_boundary_text(polygon: Node) -> Option<String> {
    polygon
        .descendants()
        .find(|n| n.has_tag_name("outerBoundaryIs"))?
        .descendants()
        .find(|n| n.has_tag_name("coordinates"))?
        .text()
        .map(str::to_string)
}

/// Parse whitespace-separated `lng,lat[,alt]` tuples. Altitude is
/// ignored; tuples that fail to parse as finite numbers are dropped.
fn parse_coordinates(text: &str) -> Vec<Coord<f64>> {
    text.split_whitespace()
        .filter_map(|tuple| {
            let mut parts = tuple.split(',');
            let lng = parts.next()?.parse::<f64>().ok()?;
            let lat = parts.next()?.parse::<f64>().ok()?;
            if lng.is_finite() && lat.is_finite() {
                Some(Coord { x: lng, y: lat })
            } else {
                None
            }
        })
        .collect()
}
