// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Conversions between geographic degrees and the portal's percent space.
//!
//! Shapes are stored in a planar "percent space" where both axes range over
//! [0, 100], linearly mapped from longitude/latitude. This keeps stored
//! coordinates independent of any map-projection library.

use geo::Coord;

/// Convert geographic degrees to percent space.
///
/// For lng in [-180, 180] and lat in [-90, 90] the result lies in
/// [0, 100] on both axes. Out-of-domain input is not validated and
/// produces out-of-range output.
pub fn geo_to_percent(lng: f64, lat: f64) -> (f64, f64) {
    let x = (lng + 180.0) / 360.0 * 100.0;
    let y = (90.0 - lat) / 180.0 * 100.0;
    (x, y)
}

/// Convert percent space back to geographic degrees.
///
/// Exact inverse of [`geo_to_percent`] up to floating-point rounding.
pub fn percent_to_geo(x: f64, y: f64) -> (f64, f64) {
    let lng = x / 100.0 * 360.0 - 180.0;
    let lat = 90.0 - y / 100.0 * 180.0;
    (lng, lat)
}

/// Convert a geographic ring to a percent-space ring.
pub fn geo_ring_to_percent(ring: &[Coord<f64>]) -> Vec<[f64; 2]> {
    ring.iter()
        .map(|c| {
            let (x, y) = geo_to_percent(c.x, c.y);
            [x, y]
        })
        .collect()
}

/// Convert a percent-space ring back to geographic coordinates.
pub fn percent_ring_to_geo(ring: &[[f64; 2]]) -> Vec<Coord<f64>> {
    ring.iter()
        .map(|&[x, y]| {
            let (lng, lat) = percent_to_geo(x, y);
            Coord { x: lng, y: lat }
        })
        .collect()
}

/// Close a ring in place by appending the first point when the last point
/// differs from it. Empty rings are left alone.
pub fn close_ring<T: PartialEq + Clone>(ring: &mut Vec<T>) {
    if ring.first() != ring.last() {
        if let Some(first) = ring.first().cloned() {
            ring.push(first);
        }
    }
}
