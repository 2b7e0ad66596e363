use crate::error::{Error, Result};

// ===================================================================================
// Default Constants
// ===================================================================================

const DEFAULT_BOX_SIZE: f32 = 600.0;
const DEFAULT_RADIUS: f32 = 5.0;
const DEFAULT_NUM_BINS: usize = 20;
const DEFAULT_BIN_WIDTH: f32 = 1.0;
const DEFAULT_ROLLING_FRAMES: usize = 30;
const DEFAULT_WINDOW_SIZE: [f32; 2] = [1100.0, 750.0];

/// Environment variable holding an optional u64 seed.
pub const SEED_ENV: &str = "IDEALGAS_SEED";

/// Settings for one run of the simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    /// Side length of the square box, in pixels.
    pub box_size: f32,
    /// Radius given to every spawned particle.
    pub radius: f32,
    /// Seed for the engine's random source; `None` draws from the OS.
    pub seed: Option<u64>,
    /// Number of speed histogram bins per species.
    pub num_bins: usize,
    /// Speed range covered by each bin.
    pub bin_width: f32,
    /// Frames averaged by the histogram display.
    pub rolling_frames: usize,
    /// Initial window size `[width, height]`.
    pub window_size: [f32; 2],
}

impl Default for SimulationParams {
    fn default() -> Self {
        SimulationParams {
            box_size: DEFAULT_BOX_SIZE,
            radius: DEFAULT_RADIUS,
            seed: None,
            num_bins: DEFAULT_NUM_BINS,
            bin_width: DEFAULT_BIN_WIDTH,
            rolling_frames: DEFAULT_ROLLING_FRAMES,
            window_size: DEFAULT_WINDOW_SIZE,
        }
    }
}

impl SimulationParams {
    /// Defaults, with the seed taken from `IDEALGAS_SEED` when set.
    pub fn from_env() -> Result<Self> {
        let seed = std::env::var(SEED_ENV).ok();
        Self::default().with_seed_str(seed.as_deref())
    }

    fn with_seed_str(mut self, seed: Option<&str>) -> Result<Self> {
        if let Some(raw) = seed {
            let parsed = raw.trim().parse::<u64>().map_err(|e| {
                Error::InvalidParam(format!("{SEED_ENV}={raw:?} is not a u64: {e}"))
            })?;
            self.seed = Some(parsed);
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks the ranges the engine and histograms rely on.
    pub fn validate(&self) -> Result<()> {
        if !self.box_size.is_finite() || self.box_size <= 2.0 {
            return Err(Error::InvalidParam("box_size must be finite and > 2".into()));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidParam("radius must be finite and > 0".into()));
        }
        if self.num_bins == 0 {
            return Err(Error::InvalidParam("num_bins must be > 0".into()));
        }
        if !self.bin_width.is_finite() || self.bin_width <= 0.0 {
            return Err(Error::InvalidParam("bin_width must be finite and > 0".into()));
        }
        if self.rolling_frames == 0 {
            return Err(Error::InvalidParam("rolling_frames must be > 0".into()));
        }
        Ok(())
    }
}
