//! Face assembly: the initialization, tick and draw surface the host drives.

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::primitives::Rectangle;
use enumset::EnumSet;

use crate::clock::{ClockSource, TimeUnit, WallTime};
use crate::config::{DisplayShape, FaceConfig};
use crate::face::FaceRenderer;
use crate::geometry::InsetProfile;
use crate::layout::FaceLayout;
use crate::scheduler::{DisplayState, FormattedStrings, UpdateScheduler};
use crate::theme::ThemeMode;

/// The whole face: update scheduler plus renderer.
///
/// The host constructs it once with the resolved display preferences, calls
/// [`start`](WatchFace::start) to run the forced first update, then forwards
/// every coalesced time notification to [`notify`](WatchFace::notify) and
/// redraws whenever [`take_redraw`](WatchFace::take_redraw) reports a
/// pending request. The face owns no host resources; dropping it is the
/// teardown path.
pub struct WatchFace {
    scheduler: UpdateScheduler,
    renderer: FaceRenderer,
}

impl WatchFace {
    /// Lays the face out once for the given display bounds. Shape and time
    /// style are fixed from here on.
    pub fn new(config: FaceConfig, bounds: Rectangle) -> Self {
        let insets = match config.shape {
            DisplayShape::Round => InsetProfile::ROUND,
            DisplayShape::Rect => InsetProfile::RECT,
        };
        let layout = FaceLayout::new(&bounds, config.shape);
        Self {
            scheduler: UpdateScheduler::new(config.time_style),
            renderer: FaceRenderer::new(bounds, insets, layout),
        }
    }

    /// Samples the clock and delivers the forced first update. No unit has
    /// changed yet, so this relies on the first-run override firing both
    /// update axes.
    pub fn start<C: ClockSource>(&mut self, clock: &mut C) {
        crate::info!("watch face starting");
        let now = clock.now();
        self.notify(&now, EnumSet::empty());
    }

    /// Host tick delivery, minute granularity.
    pub fn notify(&mut self, now: &WallTime, changed: EnumSet<TimeUnit>) {
        self.scheduler.notify(now, changed);
    }

    /// Consumes the pending redraw request; when true, the host should
    /// follow up with [`draw`](WatchFace::draw).
    pub fn take_redraw(&mut self) -> bool {
        self.scheduler.take_redraw()
    }

    pub fn state(&self) -> &DisplayState {
        self.scheduler.state()
    }

    pub fn strings(&self) -> &FormattedStrings {
        self.scheduler.strings()
    }

    pub fn theme(&self) -> ThemeMode {
        self.scheduler.theme()
    }

    /// Renders the face from the last-known state into the host surface.
    /// Safe to call at any time, including before the first tick.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let palette = self.scheduler.theme().palette();
        self.renderer
            .draw(self.scheduler.state(), self.scheduler.strings(), palette, target)
    }
}
