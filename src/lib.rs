//! Radial "day progress" watch face core for low-power monochrome displays.
//!
//! One revolution of the progress ring represents one calendar day: the ring
//! sweeps clockwise from a fixed midnight marker at the top of the face. The
//! face also shows the weekday/date, the current time, and how many days are
//! left in the year, and switches between a day and a night palette by hour.
//!
//! The host owns the display surface, fonts and the periodic timer; it hands
//! the face a clock sample plus a coalesced set of changed units once per
//! minute (see [`WatchFace::notify`]) and draws into any
//! `embedded-graphics` draw target when a redraw has been requested.

#![no_std]

pub mod app;
pub mod calendar;
pub mod clock;
pub mod config;
pub mod face;
pub mod geometry;
pub mod layout;
pub mod scheduler;
pub mod theme;

cfg_if::cfg_if! {
    if #[cfg(feature = "log")] {
        pub use log::{trace, debug, info, warn, error};
    }
    else if #[cfg(feature = "defmt")] {
        pub use defmt::{trace, debug, info, warn, error};
    }
    else {
        #[macro_export]
        macro_rules! trace {
            ($($arg:tt)*) => {{}};
        }
        #[macro_export]
        macro_rules! debug {
            ($($arg:tt)*) => {{}};
        }
        #[macro_export]
        macro_rules! info {
            ($($arg:tt)*) => {{}};
        }
        #[macro_export]
        macro_rules! warn {
            ($($arg:tt)*) => {{}};
        }
        #[macro_export]
        macro_rules! error {
            ($($arg:tt)*) => {{}};
        }
    }
}

pub use app::WatchFace;
pub use clock::{ClockSource, TimeUnit, WallTime};
pub use config::{DisplayShape, FaceConfig, TimeStyle};
pub use theme::{Palette, ThemeMode};
