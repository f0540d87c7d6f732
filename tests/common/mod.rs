// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for integration tests.

use geoportal_core::{ImportConfig, ShapeImporter};
use serde_json::json;

/// Importer with the default configuration.
pub fn importer() -> ShapeImporter {
    ShapeImporter::new(ImportConfig::default())
}

/// A FeatureCollection with one unit-square Polygon feature (degrees).
pub fn unit_square_geojson() -> String {
    json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "Unit square" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]]
                }
            }
        ]
    })
    .to_string()
}

/// A KML document with one Placemark containing a unit-square Polygon.
pub fn unit_square_kml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <name>Unit square</name>
      <Polygon>
        <outerBoundaryIs>
          <LinearRing>
            <coordinates>0,0 1,0 1,1 0,1 0,0</coordinates>
          </LinearRing>
        </outerBoundaryIs>
      </Polygon>
    </Placemark>
  </Document>
</kml>"#
        .to_string()
}
