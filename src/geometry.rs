//! Fixed-point face angles and the ring geometry derived from the display
//! bounds.

use embedded_graphics::geometry::{Angle, Point};
use embedded_graphics::primitives::Rectangle;

/// Face angle in fixed-point units. One full turn is [`FACE_ANGLE_MAX`];
/// angle zero points at midnight (the top of the face) and grows clockwise.
pub type FaceAngle = u32;

/// One full revolution in face angle units.
pub const FACE_ANGLE_MAX: FaceAngle = 0x1_0000;

/// The fixed reference angle of the midnight marker.
pub const MIDNIGHT_ANGLE: FaceAngle = 0;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Sweep of the progress ring: one revolution represents one calendar day,
/// so 00:00 maps to 0 and 23:59 to just under a full turn. Integer
/// arithmetic only; monotone in minutes since midnight.
pub fn sweep_angle(hour: u8, minute: u8) -> FaceAngle {
    let minutes = hour as u32 * 60 + minute as u32;
    FACE_ANGLE_MAX * minutes / MINUTES_PER_DAY
}

pub fn to_degrees(angle: FaceAngle) -> f32 {
    angle as f32 * 360.0 / FACE_ANGLE_MAX as f32
}

/// Absolute screen-space angle for embedded-graphics, whose zero sits at the
/// 3 o'clock position.
pub fn screen_angle(angle: FaceAngle) -> Angle {
    Angle::from_degrees(to_degrees(angle) - 90.0)
}

/// Angular extent for embedded-graphics arcs; positive sweeps run clockwise
/// on screen.
pub fn arc_sweep(angle: FaceAngle) -> Angle {
    Angle::from_degrees(to_degrees(angle))
}

/// Boundary shrink values defining the marker and ring radii relative to the
/// display bounds, in pixels. Two profiles exist so round and rectangular
/// panels can place the ring differently; the active one is chosen once at
/// layout time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InsetProfile {
    pub ring_inset: u32,
    pub marker_inset: u32,
    pub ring_width: u32,
}

impl InsetProfile {
    pub const ROUND: Self = Self {
        ring_inset: 9,
        marker_inset: 17,
        ring_width: 12,
    };

    pub const RECT: Self = Self {
        ring_inset: 5,
        marker_inset: 12,
        ring_width: 11,
    };
}

/// Radius of the largest circle that fits `bounds` after shrinking every
/// edge by `inset`.
pub fn fit_radius(bounds: &Rectangle, inset: u32) -> i32 {
    let side = bounds.size.width.min(bounds.size.height);
    (side / 2) as i32 - inset as i32
}

/// Point on the circle of `radius` around `center` at the given face angle.
pub fn polar(center: Point, radius: i32, angle: FaceAngle) -> Point {
    let rad = to_degrees(angle).to_radians();
    let x = center.x as f32 + libm::sinf(rad) * radius as f32;
    let y = center.y as f32 - libm::cosf(rad) * radius as f32;
    Point::new(libm::roundf(x) as i32, libm::roundf(y) as i32)
}
