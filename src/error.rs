use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the physics kernel: particle construction through
/// the validating constructor, configuration, and application bootstrap.
///
/// The per-tick operations of [`crate::core::ParticleEngine`] never fail.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid particle or configuration parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// The global rayon pool could not be built.
    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// The native window failed to start or crashed.
    #[error(transparent)]
    Gui(#[from] eframe::Error),
}
