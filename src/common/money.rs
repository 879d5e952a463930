use bigdecimal::{BigDecimal, ParseBigDecimalError, ToPrimitive};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};
use serde_json::value::RawValue;
use std::cmp::Ordering;
use std::fmt;

const SCALE: i64 = 100;

#[derive(Debug, Clone, Copy, Default)]
/// A monetary value stored in the smallest currency unit (paise).
///
/// Amounts typed at the prompt or read from the data file are decimal text
/// or JSON numbers; both go through `BigDecimal` and are rounded to two
/// fractional digits so that balances never accumulate floating-point drift.
/// Arithmetic is checked: a result outside the `i64` range is `None`.
///
/// # Examples
/// ```
/// use bank_ledger::common::money::Money;
///
/// let amount: Money = "12.5".parse().unwrap();
/// assert_eq!(amount.as_minor(), 1250);
/// assert_eq!(amount.to_string_2dp(), "12.50");
/// assert_eq!(Money::from_minor(i64::MAX).checked_add(amount), None);
/// ```
pub struct Money(i64);

impl Money {
    pub fn from_minor(value: i64) -> Self {
        Money(value)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_minor(&self) -> i64 {
        self.0
    }

    pub fn to_string_2dp(&self) -> String {
        let bd = BigDecimal::from(self.0) / BigDecimal::from(SCALE);
        format!("{:.2}", bd)
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    /// Sum of all amounts, or `None` if any partial sum leaves the range.
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Option<Money> {
        amounts
            .into_iter()
            .try_fold(Money::zero(), Money::checked_add)
    }

    fn from_decimal(bd: BigDecimal) -> Option<Self> {
        (bd * BigDecimal::from(SCALE)).round(0).to_i64().map(Money)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;
        Self::from_decimal(bd).ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

// The data file keeps balances as plain JSON numbers, written and read as
// their exact decimal text so no value is squeezed through an `f64`.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(self.to_string_2dp()).map_err(ser::Error::custom)?;
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        let text = raw.get();
        if !text.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
            return Err(de::Error::custom(format!("expected a number, found {text}")));
        }
        text.parse()
            .map_err(|e| de::Error::custom(format!("bad amount {text}: {e}")))
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
