use thiserror::Error;

/// Failures raised by the caliper and roll-length calculations.
///
/// These represent invalid input data, never transient conditions, so callers
/// should surface them rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RollError {
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("degenerate slope {slope}: caliper is undefined")]
    DegenerateSlope { slope: f64 },

    #[error("invalid roll geometry: roll diameter {diam_roll_mm} mm must exceed core diameter {diam_core_mm} mm")]
    InvalidGeometry { diam_roll_mm: f64, diam_core_mm: f64 },

    #[error("degenerate caliper {caliper_mm} mm: caliper must be positive")]
    DegenerateCaliper { caliper_mm: f64 },

    #[error("invalid measurement (diameter={diameter_mm} mm, length={length_m} m): {reason}")]
    InvalidMeasurement {
        diameter_mm: f64,
        length_m: f64,
        reason: &'static str,
    },
}

impl RollError {
    /// Exit code used by the `roll` binary for this error kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            RollError::InvalidGeometry { .. } | RollError::DegenerateCaliper { .. } => 2,
            RollError::InsufficientData(_) | RollError::InvalidMeasurement { .. } => 3,
            RollError::DegenerateSlope { .. } => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<RollError> for AppError {
    fn from(err: RollError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
