//! Host display preferences, resolved once at initialization and injected
//! into the face. None of these change between redraws.

/// 12- or 24-hour time formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeStyle {
    #[default]
    H24,
    H12,
}

/// Shape class of the host display, selecting which inset profile the ring
/// geometry uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayShape {
    #[default]
    Round,
    Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceConfig {
    pub time_style: TimeStyle,
    pub shape: DisplayShape,
}
