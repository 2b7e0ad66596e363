//! Speed-distribution statistics for one particle species.
//!
//! These are derived views over the engine's particles and never feed back
//! into the physics.

use crate::core::Particle;

/// Speed histogram of the particles carrying one type tag.
///
/// Bin `k` (1-based, `k` in `1..=num_bins`) counts particles whose speed
/// satisfies `ceil(speed / bin_width) == k`. Speeds of exactly zero or above
/// the last bin are not counted.
#[derive(Debug, Clone)]
pub struct SpeedHistogram {
    kind: usize,
    bin_width: f32,
    counts: Vec<f32>,
}

impl SpeedHistogram {
    pub fn new(kind: usize, num_bins: usize, bin_width: f32) -> Self {
        Self {
            kind,
            bin_width,
            counts: vec![0.0; num_bins],
        }
    }

    pub fn kind(&self) -> usize {
        self.kind
    }

    pub fn bin_width(&self) -> f32 {
        self.bin_width
    }

    /// Per-bin counts; index 0 is bin 1.
    pub fn counts(&self) -> &[f32] {
        &self.counts
    }

    /// Number of particles that landed in a bin.
    pub fn total(&self) -> f32 {
        self.counts.iter().sum()
    }

    /// Recomputes the counts from the current particles.
    pub fn tally(&mut self, particles: &[Particle]) {
        self.counts.fill(0.0);

        for p in particles.iter().filter(|p| p.kind() == self.kind) {
            let bin = (p.speed() / self.bin_width).ceil() as usize;
            if (1..=self.counts.len()).contains(&bin) {
                self.counts[bin - 1] += 1.0;
            }
        }
    }
}

/// Rolling average of the last `frames` histograms, so the chart does not
/// flicker from one tick to the next.
#[derive(Debug, Clone)]
pub struct RollingHistogram {
    current: SpeedHistogram,
    ring: Vec<Vec<f32>>,
    next: usize,
    stored: usize,
    smoothed: Vec<f32>,
}

impl RollingHistogram {
    pub fn new(kind: usize, num_bins: usize, bin_width: f32, frames: usize) -> Self {
        let frames = frames.max(1);
        Self {
            current: SpeedHistogram::new(kind, num_bins, bin_width),
            ring: vec![vec![0.0; num_bins]; frames],
            next: 0,
            stored: 0,
            smoothed: vec![0.0; num_bins],
        }
    }

    /// Histogram of the most recent frame.
    pub fn current(&self) -> &SpeedHistogram {
        &self.current
    }

    /// Averaged counts over the stored frames.
    pub fn smoothed(&self) -> &[f32] {
        &self.smoothed
    }

    /// Tallies this frame and folds it into the rolling average.
    pub fn push(&mut self, particles: &[Particle]) {
        self.current.tally(particles);

        self.ring[self.next].copy_from_slice(self.current.counts());
        self.next = (self.next + 1) % self.ring.len();
        if self.stored < self.ring.len() {
            self.stored += 1;
        }

        self.smoothed.fill(0.0);
        for frame in &self.ring[..self.stored] {
            for (sum, &val) in self.smoothed.iter_mut().zip(frame) {
                *sum += val;
            }
        }
        let denom = self.stored as f32;
        for val in &mut self.smoothed {
            *val /= denom;
        }
    }

    /// Drops all history, e.g. after the particles were cleared.
    pub fn reset(&mut self) {
        for frame in &mut self.ring {
            frame.fill(0.0);
        }
        self.next = 0;
        self.stored = 0;
        self.smoothed.fill(0.0);
        self.current.counts.fill(0.0);
    }
}
