// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Polygon area computation and display formatting.

use geo::{ChamberlainDuquetteArea, Coord, LineString, Polygon};

use crate::geometry;

/// Smallest reportable area in square meters. Degenerate shapes clamp
/// here so the stored value stays usable as a non-zero divisor and the
/// shape stays visible downstream.
pub const MIN_AREA_M2: f64 = 0.01;

/// Square meters per hectare.
const M2_PER_HECTARE: f64 = 10_000.0;

/// Area of a geographic ring in square meters.
///
/// The ring is closed if needed and measured on the WGS84 sphere
/// (Chamberlain–Duquette), matching the portal's map tooling. Returns
/// `None` for rings with fewer than 3 points; valid rings always report
/// at least [`MIN_AREA_M2`].
pub fn geo_ring_area_m2(ring: &[Coord<f64>]) -> Option<f64> {
    if ring.len() < 3 {
        return None;
    }
    let mut closed = ring.to_vec();
    geometry::close_ring(&mut closed);
    let polygon = Polygon::new(LineString::from(closed), Vec::new());
    Some(polygon.chamberlain_duquette_unsigned_area().max(MIN_AREA_M2))
}

/// Area of a percent-space ring in square meters.
pub fn percent_ring_area_m2(ring: &[[f64; 2]]) -> Option<f64> {
    if ring.len() < 3 {
        return None;
    }
    geo_ring_area_m2(&geometry::percent_ring_to_geo(ring))
}

/// Human-readable area: square meters for tiny shapes, hectares up to
/// 100 ha, square kilometers beyond.
pub fn format_area(area_m2: f64) -> String {
    let hectares = area_m2 / M2_PER_HECTARE;
    if hectares < 0.01 {
        format!("{:.0} m²", area_m2)
    } else if hectares < 100.0 {
        format!("{:.2} ha", hectares)
    } else {
        format!("{:.2} km²", hectares / 100.0)
    }
}
