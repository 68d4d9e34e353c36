//! Demonstrations of why `==` on `f64` is unreliable after arithmetic, plus
//! the integer-limits reporting used alongside them.

use std::fmt::Display;

/// Multiplier applied to the machine epsilon to form the comparison tolerance.
pub const EPSILON_SCALE: f64 = 100.0;

/// True when `a` and `b` differ by less than 100 machine epsilons.
///
/// The tolerance is absolute, not relative to the operands, so this is only
/// meaningful for values near unit magnitude; much larger values will compare
/// unequal even when they agree to full relative precision, and much smaller
/// ones will compare equal when they should not. See the crate tests.
#[inline]
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < f64::EPSILON * EPSILON_SCALE
}

/// Decimal range of an integer type, for the limits report.
pub trait DecimalLimits: Sized + Display {
    /// Decimal digits guaranteed to round-trip through this type.
    const DIGITS10: u32;
    fn min_value() -> Self;
    fn max_value() -> Self;
}

macro_rules! decimal_limits_impl {
    ($(($int:ty, $digits:expr)),+ $(,)?) => {
        $(impl DecimalLimits for $int {
            const DIGITS10: u32 = $digits;
            fn min_value() -> Self {
                <$int>::MIN
            }
            fn max_value() -> Self {
                <$int>::MAX
            }
        })+
    };
}

decimal_limits_impl!((i32, 9), (u32, 9), (i64, 18), (u64, 19));

/// Renders `value` in decimal with `,` thousands separators.
#[must_use]
pub fn group_thousands<T: Display>(value: T) -> String {
    let rendered = value.to_string();
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let mut grouped = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    grouped.push_str(sign);
    let leading = digits.len() % 3;
    let (head, tail) = digits.split_at(leading);
    grouped.push_str(head);
    for (index, chunk) in tail.as_bytes().chunks(3).enumerate() {
        if !head.is_empty() || index > 0 {
            grouped.push(',');
        }
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or_default());
    }
    grouped
}

/// One report line, e.g. `i32 digits: 9; min=-2,147,483,648; max=2,147,483,647`.
#[must_use]
pub fn limits_line<T: DecimalLimits>(type_name: &str) -> String {
    format!(
        "{type_name} digits: {}; min={}; max={}",
        T::DIGITS10,
        group_thousands(T::min_value()),
        group_thousands(T::max_value()),
    )
}
