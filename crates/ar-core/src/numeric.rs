use crate::ArError;

/// Floating point type used throughout system
pub type Real = f64;

/// Reject NaN and infinities, naming the offending quantity.
pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, ArError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ArError::NonFinite { what, value: v })
    }
}

/// Clamp at zero. Gauge pressure never goes negative in the loss model.
#[inline]
pub fn non_negative(v: Real) -> Real {
    v.max(0.0)
}
