use crate::Precision;

/// Brings a raw coordinate into canonical form.
///
/// `NaN` and the infinities collapse to `0.0`, finite values are rounded to
/// `precision` decimal digits and negative zero is folded into `0.0`, so that
/// two coordinates that print the same also compare equal.
pub fn safe_number(value: f64, precision: Precision) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let factor = precision.factor();
    let rounded = (value * factor).round() / factor;
    if !rounded.is_finite() {
        // Scaling overflowed; the value is already coarser than the precision.
        return value;
    }
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
