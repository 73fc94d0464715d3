//! Threshold tables and the shared color ramp.

/// Nine color tokens, light green through dark red.
pub const PALETTE: [&str; 9] = [
    "#e6f5d0",
    "#b8e186",
    "#7fbc41",
    "#4d9221",
    "#ffeda0",
    "#feb24c",
    "#f03b20",
    "#bd0026",
    "#800026",
];

/// Fill for counties with no usable value.
pub const NO_DATA_COLOR: &str = "#ccc";

/// Ordered bucket boundaries for one metric (ascending, not checked).
#[derive(Debug)]
pub struct Scale {
    thresholds: &'static [f64],
}

pub(super) static TRAVEL_TIME_SCALE: Scale = Scale { thresholds: &[10.0, 20.0, 30.0, 40.0, 50.0] };

pub(super) static RATIO_SCALE: Scale = Scale { thresholds: &[0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0, 2.25] };

impl Scale {
    pub fn thresholds(&self) -> &'static [f64] { self.thresholds }

    /// Index into `PALETTE` for a value: the first threshold strictly greater than
    /// `value` picks the bucket, so a value equal to a boundary lands one bucket up.
    /// Values at or past the last threshold take the final palette entry.
    pub fn bucket(&self, value: f64) -> usize {
        self.thresholds.iter()
            .position(|&t| value < t)
            .unwrap_or(PALETTE.len() - 1)
            .min(PALETTE.len() - 1)
    }

    pub fn color(&self, value: f64) -> &'static str {
        PALETTE[self.bucket(value)]
    }
}
