//! Radar (spider) chart geometry for the skill scores.

use crate::content::SkillScore;
use crate::theme::Theme;
use std::f64::consts::PI;

pub const GRID_LEVELS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartPalette {
    pub text: &'static str,
    pub grid: &'static str,
    pub series: &'static str,
    pub series_fill: &'static str,
}

impl ChartPalette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                text: "#373d3f",
                grid: "#e8e8e8",
                series: "#008ffb",
                series_fill: "rgba(0, 143, 251, 0.25)",
            },
            Theme::Dark => Self {
                text: "#f6f7f8",
                grid: "#535a6c",
                series: "#4cb1ff",
                series_fill: "rgba(76, 177, 255, 0.3)",
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    pub point: Point,
    pub tooltip: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    pub text: &'static str,
    pub anchor: Point,
    pub text_anchor: &'static str,
}

#[derive(Clone, Debug)]
pub struct RadarChart<'a> {
    scores: &'a [SkillScore],
    max: f64,
    center: Point,
    radius: f64,
}

impl<'a> RadarChart<'a> {
    pub fn new(scores: &'a [SkillScore], max: f64, size: f64, margin: f64) -> Self {
        Self {
            scores,
            max: max.max(f64::EPSILON),
            center: Point {
                x: size / 2.0,
                y: size / 2.0,
            },
            radius: (size / 2.0 - margin).max(1.0),
        }
    }

    /// Axis 0 points straight up; the rest follow clockwise.
    fn angle(&self, index: usize) -> f64 {
        2.0 * PI * index as f64 / self.scores.len().max(1) as f64 - PI / 2.0
    }

    fn polar(&self, index: usize, distance: f64) -> Point {
        let angle = self.angle(index);
        Point {
            x: self.center.x + distance * angle.cos(),
            y: self.center.y + distance * angle.sin(),
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn spoke_ends(&self) -> Vec<Point> {
        (0..self.scores.len()).map(|index| self.polar(index, self.radius)).collect()
    }

    pub fn grid_ring(&self, level: f64) -> Vec<Point> {
        (0..self.scores.len())
            .map(|index| self.polar(index, self.radius * level))
            .collect()
    }

    pub fn vertices(&self) -> Vec<Vertex> {
        self.scores
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let ratio = (entry.score / self.max).clamp(0.0, 1.0);
                Vertex {
                    point: self.polar(index, self.radius * ratio),
                    tooltip: format!("{}: {}", entry.label, entry.score),
                }
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<AxisLabel> {
        self.scores
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let anchor = self.polar(index, self.radius + 14.0);
                let dx = anchor.x - self.center.x;
                let text_anchor = if dx.abs() < 1.0 {
                    "middle"
                } else if dx > 0.0 {
                    "start"
                } else {
                    "end"
                };
                AxisLabel {
                    text: entry.label,
                    anchor,
                    text_anchor,
                }
            })
            .collect()
    }
}

/// SVG `points` attribute for a closed polygon.
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{:.2},{:.2}", point.x, point.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{SKILL_SCORES, SKILL_SCORE_MAX};

    fn chart() -> RadarChart<'static> {
        RadarChart::new(&SKILL_SCORES, SKILL_SCORE_MAX, 300.0, 50.0)
    }

    #[test]
    fn first_axis_points_up() {
        let ends = chart().spoke_ends();

        assert_eq!(ends.len(), 5);
        assert!((ends[0].x - 150.0).abs() < 1e-9);
        assert!((ends[0].y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn vertices_scale_with_score() {
        let vertices = chart().vertices();

        // Python scores 8 of 10 on a 100px radius.
        assert!((vertices[0].point.y - 70.0).abs() < 1e-9);
        assert_eq!(vertices[0].tooltip, "Python: 8");
        assert_eq!(vertices[2].tooltip, "SQL: 9");
    }

    #[test]
    fn labels_anchor_away_from_the_center() {
        let labels = chart().labels();

        assert_eq!(labels[0].text_anchor, "middle");
        assert_eq!(labels[1].text_anchor, "start");
        assert_eq!(labels[4].text_anchor, "end");
    }

    #[test]
    fn palette_switches_with_theme() {
        assert_ne!(
            ChartPalette::for_theme(Theme::Light),
            ChartPalette::for_theme(Theme::Dark)
        );
        assert_eq!(ChartPalette::for_theme(Theme::Dark).text, "#f6f7f8");
    }

    #[test]
    fn points_attr_joins_pairs() {
        let attr = points_attr(&[Point { x: 1.0, y: 2.5 }, Point { x: 3.0, y: 4.0 }]);

        assert_eq!(attr, "1.00,2.50 3.00,4.00");
    }
}
