/// Tunables for the rotation controller and projector
use thiserror::Error;

/// Default anchor resample cadence, in frames
pub const DEFAULT_CADENCE: u32 = 20;
/// Default per-frame velocity decay while released
pub const DEFAULT_DECAY: f64 = 0.9;
/// Default `min(width, height) / divisor` cube scale divisor
pub const DEFAULT_SCALE_DIVISOR: f64 = 5.0;

/// Errors raised while validating a [`SceneConfig`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Cadence must be at least one frame
    #[error("cadence must be at least 1 frame")]
    ZeroCadence,

    /// Decay must keep velocity shrinking
    #[error("decay factor {0} is outside [0, 1)")]
    DecayOutOfRange(f64),

    /// Scale divisor must be positive and finite
    #[error("scale divisor {0} must be a positive finite number")]
    InvalidScaleDivisor(f64),
}

/// Result type for configuration
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Validated scene tunables
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    cadence: u32,
    decay: f64,
    scale_divisor: f64,
}

impl SceneConfig {
    pub fn new(cadence: u32, decay: f64, scale_divisor: f64) -> Result<Self> {
        if cadence == 0 {
            return Err(ConfigError::ZeroCadence);
        }
        if !(0.0..1.0).contains(&decay) {
            return Err(ConfigError::DecayOutOfRange(decay));
        }
        if !scale_divisor.is_finite() || scale_divisor <= 0.0 {
            return Err(ConfigError::InvalidScaleDivisor(scale_divisor));
        }
        Ok(Self {
            cadence,
            decay,
            scale_divisor,
        })
    }

    /// Frames between anchor resamples, also the velocity divisor
    pub fn cadence(&self) -> u32 {
        self.cadence
    }

    pub fn decay(&self) -> f64 {
        self.decay
    }

    pub fn scale_divisor(&self) -> f64 {
        self.scale_divisor
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cadence: DEFAULT_CADENCE,
            decay: DEFAULT_DECAY,
            scale_divisor: DEFAULT_SCALE_DIVISOR,
        }
    }
}
