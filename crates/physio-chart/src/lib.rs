//! physio-chart
//!
//! Score-history chart for a patient, drawn onto an abstract 2D surface.
//! The crate knows nothing about any UI toolkit: hosts either implement
//! [`surface::Surface`] directly or replay the [`surface::DrawCommand`]s
//! captured by a [`surface::RecordingSurface`].

pub mod render;
pub mod style;
pub mod surface;

pub use render::{render_score_chart, score_series};
pub use style::ChartStyle;
pub use surface::{DrawCommand, Point, RecordingSurface, Surface};
