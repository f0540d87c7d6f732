//! Importer configuration.
//!
//! The color palette and default labels used to live as constants inside
//! the import paths; they are explicit configuration now so the importer
//! can be exercised without any UI context.

/// Configuration for the shape importer, passed in by the caller.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Display colors cycled across imported shapes.
    pub palette: Vec<String>,
    /// Classification label for shapes without a type property.
    pub default_type: String,
    /// Status assigned to shapes without a status property.
    pub default_status: String,
    /// Segment tag for shapes imported from GeoJSON.
    pub geojson_segment: String,
    /// Classification label for KML shapes without a type property.
    pub kml_type: String,
    /// Segment tag for shapes imported from KML.
    pub kml_segment: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            palette: ["#0EA5E9", "#8B5CF6", "#10B981", "#F97316", "#EAB308", "#EC4899"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_type: "Imported object".to_string(),
            default_status: "Imported".to_string(),
            geojson_segment: "Imported data".to_string(),
            kml_type: "KML object".to_string(),
            kml_segment: "KML import".to_string(),
        }
    }
}

impl ImportConfig {
    /// Color for the shape at `index`, cycling through the palette.
    pub fn color_for(&self, index: usize) -> String {
        self.palette
            .get(index % self.palette.len().max(1))
            .cloned()
            .unwrap_or_else(|| "#3b82f6".to_string())
    }
}
