// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Integration tests for the GeoJSON import path.

use geoportal_core::{ImportError, RecordCoordinates, ShapeFormat};
use serde_json::json;

mod common;

#[test]
fn test_unit_square_polygon_imports_one_record() {
    let records = common::importer()
        .import_geojson(&common::unit_square_geojson())
        .expect("Import should succeed");

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.name, "Unit square");
    assert_eq!(record.attributes["isMultiPolygon"], json!(false));
    assert_eq!(record.attributes["partsCount"], json!(1));
    assert!(record.area > 0.0, "area should be positive, got {}", record.area);

    // A 1°x1° square at the equator is roughly 12,300 km².
    assert!(record.area > 1.2e10 && record.area < 1.25e10, "got {}", record.area);
}

#[test]
fn test_coordinates_normalized_to_percent_space() {
    let records = common::importer()
        .import_geojson(&common::unit_square_geojson())
        .unwrap();

    let ring = records[0].coordinates.first_ring().unwrap();
    // (lng 0, lat 0) maps to (50, 50); (lng 1, lat 1) to the adjacent cell.
    assert_eq!(ring[0], [50.0, 50.0]);
    for &[x, y] in ring {
        assert!((0.0..=100.0).contains(&x));
        assert!((0.0..=100.0).contains(&y));
    }
}

#[test]
fn test_single_feature_document_imports() {
    let text = json!({
        "type": "Feature",
        "properties": { "name": "Solo" },
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[10.0, 10.0], [10.0, 11.0], [11.0, 11.0], [10.0, 10.0]]]
        }
    })
    .to_string();

    let records = common::importer().import_geojson(&text).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Solo");
}

#[test]
fn test_multipolygon_collects_one_ring_per_part() {
    let text = json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": { "name": "Two islands" },
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": [
                    [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                    [[[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]]
                ]
            }
        }]
    })
    .to_string();

    let records = common::importer().import_geojson(&text).unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.attributes["isMultiPolygon"], json!(true));
    assert_eq!(record.attributes["partsCount"], json!(2));
    assert!(matches!(record.coordinates, RecordCoordinates::Multi(_)));
    assert_eq!(record.coordinates.part_count(), 2);
}

#[test]
fn test_multipolygon_area_sums_all_parts() {
    let one_part = json!({
        "type": "Feature",
        "geometry": {
            "type": "MultiPolygon",
            "coordinates": [
                [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
            ]
        }
    })
    .to_string();
    let two_parts = json!({
        "type": "Feature",
        "geometry": {
            "type": "MultiPolygon",
            "coordinates": [
                [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]],
                [[[10.0, 0.0], [11.0, 0.0], [11.0, 1.0], [10.0, 1.0], [10.0, 0.0]]]
            ]
        }
    })
    .to_string();

    let importer = common::importer();
    let single = importer.import_geojson(&one_part).unwrap()[0].area;
    let double = importer.import_geojson(&two_parts).unwrap()[0].area;
    assert!(
        ((double - 2.0 * single) / double).abs() < 1e-6,
        "two equal parts should double the area: {} vs {}",
        double,
        single
    );
}

#[test]
fn test_calculated_area_wins_over_declared_area() {
    let text = json!({
        "type": "Feature",
        "properties": { "name": "Liar", "area": 7.0 },
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]]
        }
    })
    .to_string();

    let records = common::importer().import_geojson(&text).unwrap();
    let record = &records[0];
    assert!(record.area > 1e9, "calculated area should be used");
    assert_eq!(record.attributes["originalArea"], json!(7.0));
}

#[test]
fn test_properties_copied_into_attributes() {
    let text = json!({
        "type": "Feature",
        "properties": {
            "name": "Lot 7",
            "type": "Farmland",
            "status": "Registered",
            "pop": 250,
            "owner": "ACME"
        },
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]]]
        }
    })
    .to_string();

    let records = common::importer().import_geojson(&text).unwrap();
    let record = &records[0];
    assert_eq!(record.object_type, "Farmland");
    assert_eq!(record.status, "Registered");
    assert_eq!(record.population, Some(250));
    assert_eq!(record.attributes["owner"], json!("ACME"));
    assert_eq!(record.attributes["name"], json!("Lot 7"));
}

#[test]
fn test_defaults_applied_for_missing_properties() {
    let text = json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]]]
        }
    })
    .to_string();

    let records = common::importer().import_geojson(&text).unwrap();
    let record = &records[0];
    assert_eq!(record.name, "Object 1");
    assert_eq!(record.object_type, "Imported object");
    assert_eq!(record.status, "Imported");
    assert_eq!(record.segment, "Imported data");
    assert_eq!(record.population, None);
}

#[test]
fn test_colors_cycle_through_palette() {
    let features: Vec<_> = (0..8)
        .map(|i| {
            json!({
                "type": "Feature",
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[
                        [f64::from(i), 0.0],
                        [f64::from(i) + 1.0, 0.0],
                        [f64::from(i) + 1.0, 1.0],
                        [f64::from(i), 0.0]
                    ]]
                }
            })
        })
        .collect();
    let text = json!({ "type": "FeatureCollection", "features": features }).to_string();

    let importer = common::importer();
    let records = importer.import_geojson(&text).unwrap();
    assert_eq!(records.len(), 8);
    assert_eq!(records[0].color, records[6].color);
    assert_eq!(records[1].color, records[7].color);
    assert_ne!(records[0].color, records[1].color);
}

#[test]
fn test_non_polygonal_features_skipped() {
    let text = json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "A point" },
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
            },
            {
                "type": "Feature",
                "properties": { "name": "Kept" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [0.0, 0.0]]]
                }
            }
        ]
    })
    .to_string();

    let records = common::importer().import_geojson(&text).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Kept");
}

#[test]
fn test_point_only_collection_is_empty_result() {
    let text = json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {},
            "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
        }]
    })
    .to_string();

    let result = common::importer().import_geojson(&text);
    assert!(matches!(result, Err(ImportError::EmptyResult)));
}

#[test]
fn test_malformed_json_is_format_error() {
    let result = common::importer().import_geojson("{not json");
    assert!(matches!(result, Err(ImportError::Format(_))));
}

#[test]
fn test_missing_features_is_format_error() {
    let result = common::importer().import_geojson(r#"{"type": "FeatureCollection"}"#);
    assert!(matches!(result, Err(ImportError::Format(_))));
}

#[test]
fn test_feature_without_geometry_is_format_error() {
    let result = common::importer().import_geojson(r#"{"type": "Feature", "properties": {}}"#);
    assert!(matches!(result, Err(ImportError::Format(_))));
}

#[test]
fn test_degenerate_ring_skipped() {
    let text = json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [1.0, 1.0]]]
            }
        }]
    })
    .to_string();

    let result = common::importer().import_geojson(&text);
    assert!(matches!(result, Err(ImportError::EmptyResult)));
}

#[test]
fn test_import_file_detects_format_and_reads() {
    let dir = std::env::temp_dir();
    let path = dir.join("geoportal_core_import_test.geojson");
    std::fs::write(&path, common::unit_square_geojson()).unwrap();

    let records = common::importer().import_file(&path).unwrap();
    assert_eq!(records.len(), 1);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_import_file_rejects_unsupported_extension() {
    let result = common::importer().import_file("parcels.shp");
    assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    assert!(matches!(
        ShapeFormat::from_path("parcels.shp"),
        Err(ImportError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = common::importer().import_file("/nonexistent/parcels.geojson");
    assert!(matches!(result, Err(ImportError::Io(_))));
}
