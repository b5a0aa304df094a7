use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Browse-mode sampling plan: rather than querying every day of the
/// horizon, one day per stride period is probed. The defaults cover a
/// 90-day horizon in roughly 13 calls. Configuration, not magic numbers,
/// so test suites can shrink the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    #[serde(default = "default_stride_days")]
    pub stride_days: u32,
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
}

fn default_stride_days() -> u32 {
    7
}

fn default_horizon_days() -> u32 {
    90
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            stride_days: default_stride_days(),
            horizon_days: default_horizon_days(),
        }
    }
}

impl SamplingConfig {
    /// One date per stride period, starting at `start`, within the horizon.
    pub fn sample_dates(&self, start: NaiveDate) -> Vec<NaiveDate> {
        let stride = self.stride_days.max(1);
        (0..self.horizon_days)
            .step_by(stride as usize)
            .map(|offset| start + Duration::days(offset as i64))
            .collect()
    }
}
