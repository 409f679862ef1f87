//! Scanline polygon fill.
//!
//! Scanline `y` samples the shape at exactly `y` and takes every edge with
//! `min(y1, y2) <= y < max(y1, y2)`. Horizontal edges never qualify. The
//! crossings are sorted and filled pairwise (even-odd), each span covering
//! pixels `[round(x0), round(x1))`. Under this half-open convention a 10×10
//! square at the origin covers exactly 100 pixels and adjacent shapes that
//! share an edge never overlap.

use crate::MAX_SURFACE_DIMENSION;
use espresso_core::Bounds;
use glam::Vec2;
use node::{Point, Shape};

/// A horizontal run of pixels `[start, end)` on row `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub start: i32,
    pub end: i32,
}

impl Span {
    pub fn len(&self) -> i32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Computes the pixel spans covered by `shape`, restricted to `clip`.
///
/// Spans never leave `-MAX_SURFACE_DIMENSION..MAX_SURFACE_DIMENSION` on either
/// axis, with or without a clip. Callers drawing to a surface should still
/// pass the surface bounds.
pub fn scanline_spans(shape: &Shape, clip: Option<&Bounds>) -> Vec<Span> {
    let points: Vec<Vec2> = shape.points().iter().map(Point::xy).collect();
    let edges: Vec<(Vec2, Vec2)> = shape
        .edges()
        .into_iter()
        .filter_map(|(start, end)| Some((*points.get(start)?, *points.get(end)?)))
        .filter(|(a, b)| a.is_finite() && b.is_finite() && a.y != b.y)
        .map(|(a, b)| if a.y < b.y { (a, b) } else { (b, a) })
        .collect();

    let Some(extent) = Bounds::from_points(edges.iter().flat_map(|&(a, b)| [a, b])) else {
        return Vec::new();
    };

    let mut top = (extent.min.y.floor() as i32).max(-MAX_SURFACE_DIMENSION);
    let mut bottom = (extent.max.y.ceil() as i32).min(MAX_SURFACE_DIMENSION);
    let (mut left, mut right) = (-MAX_SURFACE_DIMENSION, MAX_SURFACE_DIMENSION);
    if let Some(clip) = clip {
        top = top.max(clip.min.y.round() as i32);
        bottom = bottom.min(clip.max.y.round() as i32);
        left = left.max(clip.min.x.round() as i32);
        right = right.min(clip.max.x.round() as i32);
    }

    let mut spans = Vec::new();
    let mut crossings = Vec::with_capacity(edges.len());
    for y in top..bottom {
        let sample = y as f32;

        crossings.clear();
        crossings.extend(
            edges
                .iter()
                .filter(|(low, high)| low.y <= sample && sample < high.y)
                .map(|(low, high)| {
                    let t = (sample - low.y) / (high.y - low.y);
                    low.x + t * (high.x - low.x)
                }),
        );
        crossings.sort_by(f32::total_cmp);

        // An unpaired trailing crossing is dropped by chunks_exact.
        for pair in crossings.chunks_exact(2) {
            let start = (pair[0].round() as i32).max(left);
            let end = (pair[1].round() as i32).min(right);
            if start < end {
                spans.push(Span { y, start, end });
            }
        }
    }

    spans
}

/// Total pixels covered by `spans`.
pub fn coverage(spans: &[Span]) -> usize {
    spans.iter().map(|span| span.len().max(0) as usize).sum()
}
