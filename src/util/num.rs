/// Why a checked arithmetic operation produced no value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Fault {
    /// The divisor was zero.
    DivisionByZero,
    /// The result does not fit the numeric type (integer overflow, or a
    /// non-finite floating-point result).
    Overflow,
}

/// Numeric types the calculator can do arithmetic on.
///
/// Each operation returns `None` instead of overflowing, wrapping, or
/// producing a non-finite value.
pub trait CheckedArithmetic: Copy + PartialEq {
    /// The additive identity, used to guard division.
    const ZERO: Self;

    /// Checked `self + rhs`.
    fn try_add(self, rhs: Self) -> Option<Self>;
    /// Checked `self - rhs`.
    fn try_sub(self, rhs: Self) -> Option<Self>;
    /// Checked `self * rhs`.
    fn try_mul(self, rhs: Self) -> Option<Self>;
    /// Checked `self / rhs`. Callers guarantee `rhs != ZERO`.
    fn try_div(self, rhs: Self) -> Option<Self>;
}

impl CheckedArithmetic for i64 {
    const ZERO: Self = 0;

    fn try_add(self, rhs: Self) -> Option<Self> {
        self.checked_add(rhs)
    }

    fn try_sub(self, rhs: Self) -> Option<Self> {
        self.checked_sub(rhs)
    }

    fn try_mul(self, rhs: Self) -> Option<Self> {
        self.checked_mul(rhs)
    }

    // Truncates toward zero; `i64::MIN / -1` is the only overflow.
    fn try_div(self, rhs: Self) -> Option<Self> {
        self.checked_div(rhs)
    }
}

impl CheckedArithmetic for f64 {
    const ZERO: Self = 0.0;

    fn try_add(self, rhs: Self) -> Option<Self> {
        finite(self + rhs)
    }

    fn try_sub(self, rhs: Self) -> Option<Self> {
        finite(self - rhs)
    }

    fn try_mul(self, rhs: Self) -> Option<Self> {
        finite(self * rhs)
    }

    fn try_div(self, rhs: Self) -> Option<Self> {
        finite(self / rhs)
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Adds two numbers of the same kind.
///
/// ## Errors
/// Returns `Fault::Overflow` if the sum is not representable.
///
/// ## Example
/// ```
/// use calcline::util::num::{Fault, add};
///
/// assert_eq!(add(2, 3), Ok(5));
/// assert_eq!(add(2.5, 0.5), Ok(3.0));
/// assert_eq!(add(i64::MAX, 1), Err(Fault::Overflow));
/// ```
pub fn add<T: CheckedArithmetic>(a: T, b: T) -> Result<T, Fault> {
    a.try_add(b).ok_or(Fault::Overflow)
}

/// Subtracts `b` from `a`.
///
/// ## Errors
/// Returns `Fault::Overflow` if the difference is not representable.
///
/// ## Example
/// ```
/// use calcline::util::num::subtract;
///
/// assert_eq!(subtract(-5, -3), Ok(-2));
/// assert_eq!(subtract(2.5, 1.5), Ok(1.0));
/// ```
pub fn subtract<T: CheckedArithmetic>(a: T, b: T) -> Result<T, Fault> {
    a.try_sub(b).ok_or(Fault::Overflow)
}

/// Multiplies two numbers of the same kind.
///
/// ## Errors
/// Returns `Fault::Overflow` if the product is not representable.
///
/// ## Example
/// ```
/// use calcline::util::num::{Fault, multiply};
///
/// assert_eq!(multiply(-4, 3), Ok(-12));
/// assert_eq!(multiply(f64::MAX, 2.0), Err(Fault::Overflow));
/// ```
pub fn multiply<T: CheckedArithmetic>(a: T, b: T) -> Result<T, Fault> {
    a.try_mul(b).ok_or(Fault::Overflow)
}

/// Divides `a` by `b`.
///
/// The divisor is compared against zero before any division happens, for
/// integers and floating-point numbers alike, so dividing by `0.0` is an error
/// rather than an infinity. Integer division truncates toward zero.
///
/// ## Errors
/// - `Fault::DivisionByZero` if `b` is zero (including `-0.0`).
/// - `Fault::Overflow` if the quotient is not representable.
///
/// ## Example
/// ```
/// use calcline::util::num::{Fault, divide};
///
/// assert_eq!(divide(7, 3), Ok(2));
/// assert_eq!(divide(-7, 3), Ok(-2));
/// assert_eq!(divide(7.5, 2.5), Ok(3.0));
/// assert_eq!(divide(5, 0), Err(Fault::DivisionByZero));
/// assert_eq!(divide(5.0, 0.0), Err(Fault::DivisionByZero));
/// assert_eq!(divide(i64::MIN, -1), Err(Fault::Overflow));
/// ```
pub fn divide<T: CheckedArithmetic>(a: T, b: T) -> Result<T, Fault> {
    if b == T::ZERO {
        return Err(Fault::DivisionByZero);
    }
    a.try_div(b).ok_or(Fault::Overflow)
}
