//! Integer money in minor units.
//!
//! Every goal, contribution and balance is an `i128` count of the escrowed
//! token's smallest unit. Arithmetic is checked and reports [`Error::Overflow`]
//! instead of wrapping; nothing here rounds.

use crate::storage_types::Error;

pub type Money = i128;

pub const ZERO: Money = 0;

/// Reject zero and negative quantities.
pub fn ensure_positive(amount: Money) -> Result<Money, Error> {
    if amount <= ZERO {
        return Err(Error::InvalidAmount);
    }
    Ok(amount)
}

pub fn checked_add(a: Money, b: Money) -> Result<Money, Error> {
    a.checked_add(b).ok_or(Error::Overflow)
}

/// Subtract `b` from `a`. A result below zero is an overdraft of custody
/// and is reported as [`Error::InvalidAmount`].
pub fn checked_sub(a: Money, b: Money) -> Result<Money, Error> {
    let out = a.checked_sub(b).ok_or(Error::Overflow)?;
    if out < ZERO {
        return Err(Error::InvalidAmount);
    }
    Ok(out)
}

pub fn reaches(raised: Money, goal: Money) -> bool {
    raised >= goal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive(1), Ok(1));
        assert_eq!(ensure_positive(0), Err(Error::InvalidAmount));
        assert_eq!(ensure_positive(-5), Err(Error::InvalidAmount));
    }

    #[test]
    fn test_add_overflow() {
        assert_eq!(checked_add(i128::MAX, 1), Err(Error::Overflow));
        assert_eq!(checked_add(6 * 10i128.pow(18), 5 * 10i128.pow(18)), Ok(11 * 10i128.pow(18)));
    }

    #[test]
    fn test_sub_never_goes_negative() {
        assert_eq!(checked_sub(10, 10), Ok(0));
        assert_eq!(checked_sub(10, 11), Err(Error::InvalidAmount));
        assert_eq!(checked_sub(i128::MIN, 1), Err(Error::Overflow));
    }
}
