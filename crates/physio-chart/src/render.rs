use jiff::civil::Date;
use tracing::debug;

use physio_core::models::Patient;
use physio_scoring::category::{MODERATE_THRESHOLD, PRONOUNCED_THRESHOLD};
use physio_scoring::scoring::SCORE_MAX;

use crate::style::ChartStyle;
use crate::surface::{Point, Surface};

pub const NO_SESSIONS_TEXT: &str = "Noch keine Scores vorhanden";
pub const NO_SCORES_TEXT: &str = "Scores erscheinen hier, sobald berechnet wurde.";
pub const AXIS_CAPTION: &str = "Score";

const PLACEHOLDER_ORIGIN: Point = Point { x: 10.0, y: 20.0 };

/// Pixel rectangle inside the padding that the scores are plotted into.
#[derive(Debug, Clone, Copy)]
struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    fn new<S: Surface + ?Sized>(surface: &S, padding: f64) -> Self {
        Self {
            left: padding,
            top: padding,
            width: (surface.width() - padding * 2.0).max(0.0),
            height: (surface.height() - padding * 2.0).max(0.0),
        }
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Scores map linearly from [0, 100] to [bottom, top].
    fn y_for(&self, score: u8) -> f64 {
        self.bottom() - f64::from(score.min(SCORE_MAX)) * self.height / f64::from(SCORE_MAX)
    }

    /// Points are spaced evenly by index, not by the time between sessions.
    fn x_for(&self, index: usize, count: usize) -> f64 {
        let step = if count > 1 {
            self.width / (count - 1) as f64
        } else {
            0.0
        };
        self.left + index as f64 * step
    }
}

/// The patient's sessions that have both a date and a score, oldest first.
pub fn score_series(patient: &Patient) -> Vec<(Date, u8)> {
    let mut series: Vec<(Date, u8)> = patient
        .sessions
        .iter()
        .filter_map(|s| Some((s.date?, s.score?)))
        .collect();
    series.sort_by_key(|(date, _)| *date);
    series
}

/// Draw the patient's score history onto `surface`.
///
/// Without any scored, dated session only a placeholder line of text is
/// drawn. Otherwise: axis frame, reference lines at the category
/// thresholds, a polyline through the scores (two or more points), and a
/// marker per score.
pub fn render_score_chart<S: Surface + ?Sized>(
    surface: &mut S,
    patient: &Patient,
    style: &ChartStyle,
) {
    surface.clear();

    if patient.sessions.is_empty() {
        render_placeholder(surface, NO_SESSIONS_TEXT, style);
        return;
    }

    let series = score_series(patient);
    if series.is_empty() {
        render_placeholder(surface, NO_SCORES_TEXT, style);
        return;
    }

    let plot = PlotArea::new(surface, style.padding);
    render_frame(surface, &plot, style);
    render_reference_lines(surface, &plot, style);
    render_series(surface, &plot, &series, style);

    debug!(patient_id = %patient.id, points = series.len(), "score chart rendered");
}

fn render_placeholder<S: Surface + ?Sized>(surface: &mut S, text: &str, style: &ChartStyle) {
    surface.fill_text(
        text,
        PLACEHOLDER_ORIGIN,
        &style.placeholder_font,
        &style.placeholder_color,
    );
}

fn render_frame<S: Surface + ?Sized>(surface: &mut S, plot: &PlotArea, style: &ChartStyle) {
    let frame = [
        Point::new(plot.left, plot.top),
        Point::new(plot.left, plot.bottom()),
        Point::new(plot.right(), plot.bottom()),
    ];
    surface.stroke_path(&frame, &style.axis_color, style.axis_width);
    surface.fill_text(
        AXIS_CAPTION,
        Point::new(plot.left + 4.0, plot.top + 10.0),
        &style.caption_font,
        &style.axis_color,
    );
}

fn render_reference_lines<S: Surface + ?Sized>(
    surface: &mut S,
    plot: &PlotArea,
    style: &ChartStyle,
) {
    let lines = [
        (MODERATE_THRESHOLD, &style.moderate_line_color),
        (PRONOUNCED_THRESHOLD, &style.pronounced_line_color),
    ];
    for (threshold, color) in lines {
        let y = plot.y_for(threshold);
        surface.stroke_path(
            &[Point::new(plot.left, y), Point::new(plot.right(), y)],
            color,
            style.axis_width,
        );
    }
}

fn render_series<S: Surface + ?Sized>(
    surface: &mut S,
    plot: &PlotArea,
    series: &[(Date, u8)],
    style: &ChartStyle,
) {
    let points: Vec<Point> = series
        .iter()
        .enumerate()
        .map(|(index, (_, score))| Point::new(plot.x_for(index, series.len()), plot.y_for(*score)))
        .collect();

    if points.len() > 1 {
        surface.stroke_path(&points, &style.series_color, style.series_width);
    }
    for point in points {
        surface.fill_circle(point, style.marker_radius, &style.marker_color);
    }
}
