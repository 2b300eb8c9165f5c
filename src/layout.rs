//! Placement of the three text regions, computed once at layout time.

use embedded_graphics::geometry::Point;
use embedded_graphics::primitives::Rectangle;

use crate::config::DisplayShape;

/// Anchor points for the centered date, time and days-left labels. Round
/// panels use deeper ring insets, so their labels sit slightly further
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceLayout {
    pub date_anchor: Point,
    pub time_anchor: Point,
    pub days_left_anchor: Point,
}

impl FaceLayout {
    pub fn new(bounds: &Rectangle, shape: DisplayShape) -> Self {
        let center = bounds.center();
        let (date_rise, days_drop) = match shape {
            DisplayShape::Round => (24, 20),
            DisplayShape::Rect => (20, 16),
        };
        Self {
            date_anchor: Point::new(center.x, center.y - date_rise),
            time_anchor: center,
            days_left_anchor: Point::new(center.x, center.y + days_drop),
        }
    }
}
