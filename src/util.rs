/// Generic checked arithmetic.
///
/// This module provides the four arithmetic routines used by the evaluator.
/// They are generic over [`num::CheckedArithmetic`], which is implemented for
/// the two numeric kinds the calculator works with: `i64` and `f64`.
///
/// Every routine returns a `Result`, which is `Ok` if the operation produced a
/// representable value, or a [`num::Fault`] describing why it did not.
pub mod num;
