//! Area-based duration scaling.
//!
//! Template durations are nominal, calibrated for a baseline floor
//! area of 50 m2. Larger projects stretch every duration by the same
//! factor and smaller ones compress it, with the factor clamped so
//! extreme areas cannot distort the schedule:
//!
//! ```text
//! multiplier = clamp(area / 50, 0.8, 1.5)
//! ```
//!
//! Scaled durations round to the nearest whole week and never drop
//! below one week.

use crate::error::ScheduleError;

/// Floor area the nominal durations are calibrated for, in m2.
pub const BASELINE_AREA_SQM: f64 = 50.0;
/// Lower clamp on the duration multiplier.
pub const MIN_MULTIPLIER: f64 = 0.8;
/// Upper clamp on the duration multiplier.
pub const MAX_MULTIPLIER: f64 = 1.5;

/// Scales nominal durations for a given floor area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationScaler {
    multiplier: f64,
}

impl DurationScaler {
    /// Creates a scaler for the given floor area.
    ///
    /// The area must be a positive, finite number of square metres.
    pub fn for_area(area_sqm: f64) -> Result<Self, ScheduleError> {
        if !area_sqm.is_finite() || area_sqm <= 0.0 {
            return Err(ScheduleError::InvalidArea { area: area_sqm });
        }
        let multiplier = (area_sqm / BASELINE_AREA_SQM).clamp(MIN_MULTIPLIER, MAX_MULTIPLIER);
        Ok(Self { multiplier })
    }

    /// The clamped multiplier applied to every duration.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Scales a nominal duration, rounding to the nearest whole week.
    ///
    /// Every activity takes at least one week, whatever the multiplier.
    pub fn scale(&self, nominal_weeks: u32) -> u32 {
        let scaled = (f64::from(nominal_weeks) * self.multiplier).round();
        scaled.max(1.0) as u32
    }
}
