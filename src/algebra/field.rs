//! The field abstraction every evaluation is anchored on

use crate::errors::EvalError;

use super::defaults;
use super::scalar::Scalar;

/// Algebraic capabilities over an opaque value type `T`.
///
/// The engine never touches `T` directly: every sum, product, identity and
/// comparison goes through a field, so the same expression graph can be
/// evaluated exactly, approximately, or over a finite field.
///
/// Implementations own the numeric representation and the tolerance policy of
/// [`Field::equal`]. Operations must be associative and commutative, because
/// N-ary nodes reduce their operands in an unspecified order.
pub trait Field<T> {
    fn add(&self, first: &T, second: &T) -> T;

    fn multiply(&self, first: &T, second: &T) -> T;

    fn additive_identity(&self) -> T;

    fn multiplicative_identity(&self) -> T;

    fn additive_inverse(&self, value: &T) -> T;

    /// Fails with [`EvalError::Arithmetic`] on the additive identity.
    ///
    /// This is the only invertibility check: a value the tolerance in
    /// [`Field::equal`] treats as zero may still be invertible.
    fn multiplicative_inverse(&self, value: &T) -> Result<T, EvalError>;

    /// Equality of two resolved values, under the field's tolerance policy.
    fn equal(&self, first: &T, second: &T) -> bool;

    /// An arbitrary value from the field's own random source.
    fn random(&self) -> T;

    /// Upper bound on resampling for `Different` scalars.
    fn max_sampling_attempts(&self) -> usize {
        defaults::DIFFERENT_MAX_ATTEMPTS
    }

    /// Resolve an expression down to a concrete value.
    fn actual(&self, scalar: &Scalar<T>) -> Result<T, EvalError>
    where
        Self: Sized,
        T: Clone + PartialEq,
    {
        scalar.value(self)
    }

    /// Resolve both expressions, then compare them.
    fn equals(&self, first: &Scalar<T>, second: &Scalar<T>) -> Result<bool, EvalError>
    where
        Self: Sized,
        T: Clone + PartialEq,
    {
        let first = first.value(self)?;
        let second = second.value(self)?;
        Ok(self.equal(&first, &second))
    }
}
