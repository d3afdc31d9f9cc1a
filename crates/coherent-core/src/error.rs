use thiserror::Error;

/// Errors raised by module setters.
///
/// Evaluation never fails; only configuration does.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseError {
    /// A parameter fell outside its accepted range.
    #[error("invalid parameter {name}: {value} outside [{min}, {max}]")]
    InvalidParam {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

pub type Result<T> = std::result::Result<T, NoiseError>;

/// Check `value` against `[min, max]`, naming the parameter in the error.
pub(crate) fn check_range(name: &'static str, value: usize, min: usize, max: usize) -> Result<()> {
    if value < min || value > max {
        return Err(NoiseError::InvalidParam {
            name,
            value: value as i64,
            min: min as i64,
            max: max as i64,
        });
    }
    Ok(())
}
