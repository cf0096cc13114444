//! Linear (directly modulated) trait update.

/// Advance a linear trait by one step.
///
/// `delta = adaptation_rate * engagement * (1 + environment_weight * environmental_factor)`
///
/// Pure and unbounded. Negative engagement or a sufficiently negative
/// environmental factor yields a negative delta.
///
/// # Example
///
/// ```
/// use life_engine::update_linear_trait;
///
/// // 0.1 * 0.8 * (1 + 0.2 * 0.5) = 0.088
/// let next = update_linear_trait(1.0, 0.8, 0.5, 0.1, 0.2);
/// assert!((next - 1.088).abs() < 1e-12);
/// ```
#[inline]
pub fn update_linear_trait(
    current_value: f64,
    engagement: f64,
    environmental_factor: f64,
    adaptation_rate: f64,
    environment_weight: f64,
) -> f64 {
    let delta = adaptation_rate * engagement * (1.0 + environment_weight * environmental_factor);
    current_value + delta
}
