// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GeoPortal core: land-parcel shape import, export, and geometry.
//!
//! This crate implements the data pipeline behind the portal's map layer.
//! Uploaded GeoJSON and KML documents are parsed into
//! [`models::PolygonRecord`] values with percent-space coordinates and
//! calculated areas, and records are serialized back to GeoJSON for
//! download. Persistence and UI live in external collaborators; this
//! crate is pure data transformation over its arguments.

pub mod color_utils;
pub mod config;
pub mod geometry;
pub mod models;
pub mod services;

pub use config::ImportConfig;
pub use models::{PercentRing, PolygonRecord, RecordCoordinates};
pub use services::{ExportError, ImportError, ShapeFormat, ShapeImporter};
