//! [`Money`]-related definitions.

use std::{fmt, iter::Sum, ops, str::FromStr};

/// Amount of money in whole Russian rubles.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Money(u64);

impl Money {
    /// Zero [`Money`].
    pub const ZERO: Self = Self(0);

    /// Currency code [`Money`] is displayed with.
    pub const CURRENCY: &'static str = "RUB";

    /// Creates a new [`Money`] of the provided whole rubles.
    #[must_use]
    pub const fn rubles(amount: u64) -> Self {
        Self(amount)
    }

    /// Returns the amount of whole rubles.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Adds two amounts, returning [`None`] on overflow.
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(sum) => Some(Self(sum)),
            None => None,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, Self::CURRENCY)
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = s.strip_suffix(Self::CURRENCY).unwrap_or(s);
        if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err("invalid amount");
        }
        amount.parse().map(Self).map_err(|_| "amount overflow")
    }
}

impl ops::Add for Money {
    type Output = Self;

    /// Saturates at [`u64::MAX`] rubles.
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, ops::Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Money;

    impl Serialize for Money {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_u64(self.0)
        }
    }

    impl<'de> Deserialize<'de> for Money {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            u64::deserialize(d).map(Self)
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use super::Money;

    #[test]
    fn from_str() {
        assert_eq!(Money::from_str("45000RUB").unwrap(), Money::rubles(45000));
        assert_eq!(Money::from_str("45000").unwrap(), Money::rubles(45000));
        assert_eq!(Money::from_str("0").unwrap(), Money::ZERO);

        assert!(Money::from_str("").is_err());
        assert!(Money::from_str("RUB").is_err());
        assert!(Money::from_str("-5").is_err());
        assert!(Money::from_str("45000USD").is_err());
        assert!(Money::from_str("123.45RUB").is_err());
        assert!(Money::from_str("99999999999999999999999").is_err());
    }

    #[test]
    fn to_string() {
        assert_eq!(Money::rubles(45000).to_string(), "45000RUB");
        assert_eq!(Money::ZERO.to_string(), "0RUB");
    }

    #[test]
    fn sums_amounts() {
        let total: Money = [Money::rubles(45000), Money::rubles(28000)]
            .iter()
            .sum();
        assert_eq!(total, Money::rubles(73000));

        assert_eq!(std::iter::empty::<Money>().sum::<Money>(), Money::ZERO);
        assert_eq!(Money::rubles(u64::MAX) + Money::rubles(1), Money::rubles(u64::MAX));
        assert_eq!(Money::rubles(u64::MAX).checked_add(Money::rubles(1)), None);
    }
}
