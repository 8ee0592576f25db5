use serde::{Deserialize, Serialize};

/// Colors, fonts, and spacing for the score chart. Colors and fonts are CSS
/// strings so a canvas host can use them unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Gap between the surface edge and the plot area, in pixels.
    pub padding: f64,

    pub axis_color: String,
    pub axis_width: f64,
    pub caption_font: String,

    pub placeholder_font: String,
    pub placeholder_color: String,

    /// Reference line at the mild/moderate boundary.
    pub moderate_line_color: String,
    /// Reference line at the moderate/pronounced boundary.
    pub pronounced_line_color: String,

    pub series_color: String,
    pub series_width: f64,
    pub marker_color: String,
    pub marker_radius: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            padding: 20.0,
            axis_color: "#4a5568".to_string(),
            axis_width: 1.0,
            caption_font: "10px system-ui".to_string(),
            placeholder_font: "12px system-ui".to_string(),
            placeholder_color: "#4a5568".to_string(),
            moderate_line_color: "rgba(72, 187, 120, 0.4)".to_string(),
            pronounced_line_color: "rgba(246, 224, 94, 0.4)".to_string(),
            series_color: "#4fd1c5".to_string(),
            series_width: 2.0,
            marker_color: "#63b3ed".to_string(),
            marker_radius: 3.0,
        }
    }
}
