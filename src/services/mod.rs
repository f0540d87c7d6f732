// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - import, export, and area computation.

pub mod area;
pub mod export;
pub mod import;
pub(crate) mod kml;

pub use export::ExportError;
pub use import::{ImportError, ShapeFormat, ShapeImporter};
