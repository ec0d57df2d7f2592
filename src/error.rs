use thiserror::Error;

/// Errors raised by the `G_eff` evaluator and its host seam.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeffError {
    /// Scale factor is not strictly positive, so `ln(a)` is undefined.
    #[error("scale factor a = {a:e} is non-positive; G_eff(a) requires a > 0")]
    Domain { a: f64 },

    /// A configured parameter is NaN or infinite.
    #[error("parameter {name} = {value} is not finite")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Per-peak widths were handed to a host that keeps a single width.
    #[error("host stores one shared peak width, but width1 = {width1} and width2 = {width2} differ")]
    UnsharedWidth { width1: f64, width2: f64 },
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

impl From<GeffError> for AppError {
    fn from(err: GeffError) -> Self {
        let exit_code = match err {
            GeffError::Domain { .. } => 3,
            GeffError::InvalidParameter { .. } | GeffError::UnsharedWidth { .. } => 2,
        };
        AppError::new(exit_code, err.to_string())
    }
}
