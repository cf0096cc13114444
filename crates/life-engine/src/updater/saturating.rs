//! Saturating (bounded growth) trait update.

use crate::error::{LifeError, LifeResult};

/// Advance a saturating trait by one step.
///
/// ```text
/// saturation_factor = 1 - current_value / saturation_level
/// time_component    = ln(1 + elapsed_time)
/// growth            = base_rate * saturation_factor * experience * time_component
/// new_value         = min(saturation_level, current_value + growth)
/// ```
///
/// The result always lies in `[0, saturation_level]` for valid inputs, however
/// large `experience` or `elapsed_time` become.
///
/// # Errors
///
/// - [`LifeError::InvalidConfiguration`] when `saturation_level <= 0` or
///   `base_rate <= 0` (or either is non-finite)
/// - [`LifeError::NegativeElapsedTime`] when `elapsed_time` is finite and `< 0`
/// - [`LifeError::InvalidInput`] when `current_value` is outside
///   `[0, saturation_level]`, or `experience` is negative or any input is
///   non-finite
///
/// # Example
///
/// ```
/// use life_engine::update_saturating_trait;
///
/// let next = update_saturating_trait(50.0, 100.0, 2.0, 9.0, 0.05).unwrap();
/// assert!((next - 50.1151).abs() < 1e-4);
///
/// assert!(update_saturating_trait(50.0, 100.0, 2.0, -1.0, 0.05).is_err());
/// ```
pub fn update_saturating_trait(
    current_value: f64,
    saturation_level: f64,
    experience: f64,
    elapsed_time: f64,
    base_rate: f64,
) -> LifeResult<f64> {
    if !saturation_level.is_finite() || saturation_level <= 0.0 {
        return Err(LifeError::InvalidConfiguration(format!(
            "saturation_level must be finite and > 0, got {}",
            saturation_level
        )));
    }
    if !base_rate.is_finite() || base_rate <= 0.0 {
        return Err(LifeError::InvalidConfiguration(format!(
            "base_rate must be finite and > 0, got {}",
            base_rate
        )));
    }
    if !elapsed_time.is_finite() {
        return Err(LifeError::invalid_input(
            "elapsed_time",
            elapsed_time,
            "Must be finite",
        ));
    }
    if elapsed_time < 0.0 {
        return Err(LifeError::NegativeElapsedTime(elapsed_time));
    }
    if !(0.0..=saturation_level).contains(&current_value) {
        return Err(LifeError::invalid_input(
            "current_value",
            current_value,
            format!("Must be in [0, {}]", saturation_level),
        ));
    }
    if !experience.is_finite() || experience < 0.0 {
        return Err(LifeError::invalid_input(
            "experience",
            experience,
            "Must be finite and >= 0",
        ));
    }

    let saturation_factor = 1.0 - current_value / saturation_level;
    let time_component = elapsed_time.ln_1p();
    if saturation_factor == 0.0 || experience == 0.0 || time_component == 0.0 {
        return Ok(current_value);
    }
    let growth = base_rate * saturation_factor * experience * time_component;

    // Overflow to +Infinity clamps to the ceiling below; NaN cannot be clamped.
    let next = current_value + growth;
    if next.is_nan() {
        return Err(LifeError::non_finite(
            "update_saturating_trait",
            format!(
                "current={}, saturation={}, experience={}, elapsed={}, base_rate={}",
                current_value, saturation_level, experience, elapsed_time, base_rate
            ),
        ));
    }

    Ok(next.clamp(0.0, saturation_level))
}
