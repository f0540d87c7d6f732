// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the portal core.

pub mod polygon;

pub use polygon::{PercentRing, PolygonRecord, RecordCoordinates};
