//! Line charts rendered as standalone SVG documents.

use std::fmt::Write as _;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;

use crate::format::{escape, thousands};

const WIDTH: f64 = 1000.0;
const HEIGHT: f64 = 600.0;
const LEFT: f64 = 90.0;
const RIGHT: f64 = 30.0;
const TOP: f64 = 70.0;
const BOTTOM: f64 = 110.0;
const GRID_LINES: u32 = 5;

/// Point marker drawn at each value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Diamond,
}

/// One series plotted against consecutive dates.
#[derive(Debug, Clone)]
pub struct LineChart {
    pub title: String,
    pub y_label: String,
    pub legend: String,
    pub color: &'static str,
    pub marker: Marker,
    pub points: Vec<(NaiveDate, f64)>,
}

impl LineChart {
    /// Render the chart. An empty series renders axes and title only.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let plot_w = WIDTH - LEFT - RIGHT;
        let plot_h = HEIGHT - TOP - BOTTOM;
        let (lo, hi) = self.y_range();
        let x_at = |i: usize| -> f64 {
            #[allow(clippy::cast_precision_loss)]
            let (i, n) = (i as f64, self.points.len() as f64);
            if n <= 1.0 {
                LEFT + plot_w / 2.0
            } else {
                LEFT + plot_w * i / (n - 1.0)
            }
        };
        let y_at = |v: f64| TOP + plot_h * (1.0 - (v - lo) / (hi - lo));

        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" width="{WIDTH}" height="{HEIGHT}" font-family="Segoe UI, Helvetica, Arial, sans-serif">"#
        );
        svg.push_str(r##"<rect width="100%" height="100%" fill="#ffffff"/>"##);
        let _ = write!(
            svg,
            r#"<text x="{x:.1}" y="40" text-anchor="middle" font-size="22" font-weight="bold">{title}</text>"#,
            x = WIDTH / 2.0,
            title = escape(&self.title),
        );

        for step in 0..=GRID_LINES {
            let value = lo + (hi - lo) * f64::from(step) / f64::from(GRID_LINES);
            let y = y_at(value);
            let _ = write!(
                svg,
                r##"<line x1="{LEFT}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="#000000" stroke-opacity="0.3" stroke-dasharray="6,4"/><text x="{tx:.1}" y="{ty:.1}" text-anchor="end" font-size="13" fill="#444444">{label}</text>"##,
                x2 = WIDTH - RIGHT,
                tx = LEFT - 10.0,
                ty = y + 4.0,
                label = thousands(value),
            );
        }

        for (i, (date, _)) in self.points.iter().enumerate() {
            let x = x_at(i);
            let _ = write!(
                svg,
                r##"<line x1="{x:.1}" y1="{TOP}" x2="{x:.1}" y2="{y2:.1}" stroke="#000000" stroke-opacity="0.3" stroke-dasharray="6,4"/><text x="{x:.1}" y="{ty:.1}" text-anchor="end" font-size="13" fill="#444444" transform="rotate(-45 {x:.1} {ty:.1})">{date}</text>"##,
                y2 = TOP + plot_h,
                ty = TOP + plot_h + 22.0,
            );
        }

        let _ = write!(
            svg,
            r##"<line x1="{LEFT}" y1="{TOP}" x2="{LEFT}" y2="{b:.1}" stroke="#333333"/><line x1="{LEFT}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}" stroke="#333333"/>"##,
            b = TOP + plot_h,
            r = WIDTH - RIGHT,
        );
        let _ = write!(
            svg,
            r#"<text x="24" y="{y:.1}" text-anchor="middle" font-size="15" transform="rotate(-90 24 {y:.1})">{label}</text><text x="{x:.1}" y="{by:.1}" text-anchor="middle" font-size="15">Date</text>"#,
            y = TOP + plot_h / 2.0,
            label = escape(&self.y_label),
            x = LEFT + plot_w / 2.0,
            by = HEIGHT - 12.0,
        );

        if !self.points.is_empty() {
            let line: Vec<String> = self
                .points
                .iter()
                .enumerate()
                .map(|(i, (_, v))| format!("{:.1},{:.1}", x_at(i), y_at(*v)))
                .collect();
            let baseline = y_at(lo);
            let _ = write!(
                svg,
                r#"<polygon points="{first:.1},{baseline:.1} {line} {last:.1},{baseline:.1}" fill="{color}" fill-opacity="0.3"/>"#,
                first = x_at(0),
                last = x_at(self.points.len() - 1),
                line = line.join(" "),
                color = self.color,
            );
            let _ = write!(
                svg,
                r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="2.5"/>"#,
                line.join(" "),
                self.color,
            );
            for (i, (_, v)) in self.points.iter().enumerate() {
                svg.push_str(&self.marker_at(x_at(i), y_at(*v)));
            }
        }

        let lx = WIDTH - RIGHT - 200.0;
        let _ = write!(
            svg,
            r##"<rect x="{lx:.1}" y="{TOP}" width="190" height="32" rx="4" fill="#ffffff" fill-opacity="0.9" stroke="#cccccc"/><line x1="{a:.1}" y1="{ly:.1}" x2="{b:.1}" y2="{ly:.1}" stroke="{color}" stroke-width="2.5"/>{marker}<text x="{tx:.1}" y="{ty:.1}" font-size="13">{legend}</text>"##,
            a = lx + 10.0,
            b = lx + 40.0,
            ly = TOP + 16.0,
            color = self.color,
            marker = self.marker_at(lx + 25.0, TOP + 16.0),
            tx = lx + 50.0,
            ty = TOP + 20.0,
            legend = escape(&self.legend),
        );

        svg.push_str("</svg>");
        svg
    }

    /// The SVG as a `data:` URI for an `<img src>`.
    #[must_use]
    pub fn to_data_uri(&self) -> String {
        format!(
            "data:image/svg+xml;base64,{}",
            STANDARD.encode(self.to_svg())
        )
    }

    /// Axis bounds: the floor sits at 95% of the minimum, like the filled area.
    fn y_range(&self) -> (f64, f64) {
        let (min, max) = self
            .points
            .iter()
            .map(|(_, v)| *v)
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 1.0));
        let lo = if min >= 0.0 { min * 0.95 } else { min * 1.05 };
        let span = max - lo;
        let hi = if span > 0.0 { max + span * 0.05 } else { lo + 1.0 };
        (lo, hi)
    }

    fn marker_at(&self, x: f64, y: f64) -> String {
        let color = self.color;
        match self.marker {
            Marker::Circle => format!(
                r##"<circle cx="{x:.1}" cy="{y:.1}" r="5" fill="{color}" stroke="#ffffff" stroke-width="1"/>"##
            ),
            Marker::Square => format!(
                r##"<rect x="{:.1}" y="{:.1}" width="10" height="10" fill="{color}" stroke="#ffffff" stroke-width="1"/>"##,
                x - 5.0,
                y - 5.0,
            ),
            Marker::Diamond => format!(
                r##"<polygon points="{x:.1},{:.1} {:.1},{y:.1} {x:.1},{:.1} {:.1},{y:.1}" fill="{color}" stroke="#ffffff" stroke-width="1"/>"##,
                y - 6.0,
                x + 6.0,
                y + 6.0,
                x - 6.0,
            ),
        }
    }
}
