//! Radial face renderer: midnight marker, day-progress ring and the three
//! text regions, drawn into any monochrome embedded-graphics target.

use embedded_graphics::{
    Drawable,
    draw_target::DrawTarget,
    mono_font::{
        MonoTextStyle,
        ascii::{FONT_6X10, FONT_10X20},
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Arc, Line, PrimitiveStyle, Rectangle},
    text::{Alignment, Text},
};

use crate::geometry::{self, FaceAngle, InsetProfile, MIDNIGHT_ANGLE};
use crate::layout::FaceLayout;
use crate::scheduler::{DisplayState, FormattedStrings};
use crate::theme::Palette;

/// Stroke width of the midnight reference line.
const MARKER_STROKE: u32 = 1;

/// Draws the face from whatever state the scheduler currently holds. The
/// bounds, inset profile and layout are fixed at construction and never
/// change between redraws.
pub struct FaceRenderer {
    bounds: Rectangle,
    insets: InsetProfile,
    layout: FaceLayout,
}

impl FaceRenderer {
    pub fn new(bounds: Rectangle, insets: InsetProfile, layout: FaceLayout) -> Self {
        Self {
            bounds,
            insets,
            layout,
        }
    }

    /// Renders the whole face. Best-effort: before the first tick the state
    /// holds midnight and the strings are empty, which draws as a bare
    /// marker on the theme background.
    pub fn draw<D>(
        &self,
        state: &DisplayState,
        strings: &FormattedStrings,
        palette: Palette,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        target.clear(palette.background)?;
        self.draw_marker(palette, target)?;
        self.draw_ring(geometry::sweep_angle(state.hour, state.minute), palette, target)?;
        self.draw_labels(strings, palette, target)
    }

    /// Fixed reference line at the top of the face, from the outer boundary
    /// down to the marker inset circle. Independent of the current time.
    fn draw_marker<D>(&self, palette: Palette, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let center = self.bounds.center();
        let outer = geometry::polar(center, geometry::fit_radius(&self.bounds, 0), MIDNIGHT_ANGLE);
        let inner = geometry::polar(
            center,
            geometry::fit_radius(&self.bounds, self.insets.marker_inset),
            MIDNIGHT_ANGLE,
        );
        Line::new(outer, inner)
            .into_styled(PrimitiveStyle::with_stroke(palette.ink, MARKER_STROKE))
            .draw(target)
    }

    /// Thick arc from midnight to the sweep angle. The stroke is centered on
    /// the arc circle, so the diameter is pulled in by one ring width to
    /// keep the outer edge on the ring inset boundary.
    fn draw_ring<D>(
        &self,
        sweep: FaceAngle,
        palette: Palette,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        if sweep == 0 {
            return Ok(());
        }
        let center = self.bounds.center();
        let radius = geometry::fit_radius(&self.bounds, self.insets.ring_inset);
        let diameter = (radius * 2 - self.insets.ring_width as i32).max(0) as u32;
        let top_left = center - Point::new(diameter as i32 / 2, diameter as i32 / 2);
        Arc::new(
            top_left,
            diameter,
            geometry::screen_angle(MIDNIGHT_ANGLE),
            geometry::arc_sweep(sweep),
        )
        .into_styled(PrimitiveStyle::with_stroke(palette.ink, self.insets.ring_width))
        .draw(target)
    }

    fn draw_labels<D>(
        &self,
        strings: &FormattedStrings,
        palette: Palette,
        target: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let small = MonoTextStyle::new(&FONT_6X10, palette.ink);
        let large = MonoTextStyle::new(&FONT_10X20, palette.ink);

        if !strings.date_text.is_empty() {
            Text::with_alignment(
                &strings.date_text,
                self.layout.date_anchor,
                small,
                Alignment::Center,
            )
            .draw(target)?;
        }
        if !strings.time_text.is_empty() {
            Text::with_alignment(
                &strings.time_text,
                self.layout.time_anchor,
                large,
                Alignment::Center,
            )
            .draw(target)?;
        }
        if !strings.days_left_text.is_empty() {
            Text::with_alignment(
                &strings.days_left_text,
                self.layout.days_left_anchor,
                small,
                Alignment::Center,
            )
            .draw(target)?;
        }
        Ok(())
    }
}
