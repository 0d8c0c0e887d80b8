pub mod constants;
mod error;
pub use error::AmountError;

use {
    bigdecimal::{BigDecimal, RoundingMode},
    num_bigint::{BigInt, BigUint},
    num_traits::Zero,
    std::fmt,
    std::str::FromStr,
};

/// Named denominations of a wei monetary amount.  Each denomination is a
/// fixed power-of-ten multiple of the base unit.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Unit {
    /// The base unit.
    Wei,
    /// Wei * 10^3
    Kwei,
    /// Wei * 10^6
    Mwei,
    /// Wei * 10^9
    Gwei,
    /// Wei * 10^12
    Szabo,
    /// Wei * 10^15
    Finney,
    /// Wei * 10^18
    Ether,
    /// Wei * 10^21
    Kether,
    /// Wei * 10^24
    Mether,
}

impl Unit {
    /// All denominations in ascending scale order.
    pub const ALL: [Unit; 9] = [
        Unit::Wei,
        Unit::Kwei,
        Unit::Mwei,
        Unit::Gwei,
        Unit::Szabo,
        Unit::Finney,
        Unit::Ether,
        Unit::Kether,
        Unit::Mether,
    ];

    /// The wei base multiplication factor expressed as a degree of power
    /// ten.  These exponents are a compatibility contract and never change.
    pub fn scale(self) -> i64 {
        match self {
            Unit::Wei => 0,
            Unit::Kwei => 3,
            Unit::Mwei => 6,
            Unit::Gwei => 9,
            Unit::Szabo => 12,
            Unit::Finney => 15,
            Unit::Ether => 18,
            Unit::Kether => 21,
            Unit::Mether => 24,
        }
    }

    /// The denomination name.  Casing follows the historical unit table.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Wei => "wei",
            Unit::Kwei => "Kwei",
            Unit::Mwei => "Mwei",
            Unit::Gwei => "Gwei",
            Unit::Szabo => "szabo",
            Unit::Finney => "finney",
            Unit::Ether => "ether",
            Unit::Kether => "Kether",
            Unit::Mether => "Mether",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = AmountError;

    /// Resolves a denomination by name.  The table has nine entries, so a
    /// linear scan is sufficient.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.name() == s)
            .ok_or_else(|| AmountError::UnknownUnit(s.to_string()))
    }
}

/// Wei represents the base monetary unit of an Ethereum-compatible chain.
/// A single wei is the smallest indivisible quantity; one ether equals
/// 10^18 wei.
///
/// The magnitude is an unsigned arbitrary-precision integer, so chain-scale
/// amounts never overflow and scale conversions never round through binary
/// floating point.  The value is immutable once constructed.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wei(BigUint);

impl Wei {
    /// Creates an amount from a base unit magnitude.
    pub fn new(amount: BigUint) -> Self {
        Self(amount)
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Creates an amount from a decimal number expressed in the given
    /// denomination.  The number is scaled by the denomination's power of
    /// ten and any fractional remainder below one wei is dropped
    /// (truncation toward zero).  Errors if the scaled amount is negative.
    pub fn from_unit(num: BigDecimal, unit: Unit) -> Result<Self, AmountError> {
        let (unscaled, exponent) = num.into_bigint_and_exponent();

        // Multiplying by 10^scale is a pure exponent shift on the decimal
        // representation.
        let shifted = BigDecimal::new(unscaled, exponent - unit.scale());
        let truncated = shifted.with_scale_round(0, RoundingMode::Down);
        let (magnitude, _) = truncated.into_bigint_and_exponent();

        match magnitude.to_biguint() {
            Some(magnitude) => Ok(Self(magnitude)),

            None => Err(AmountError::Negative),
        }
    }

    /// Creates an amount from a floating point number expressed in the
    /// given denomination.  Errors if the value is NaN or +-infinity.
    ///
    /// The double is first rendered as its shortest decimal string and the
    /// string is scaled, so the result tracks the decimal form of the
    /// double rather than its raw binary expansion.  Doubles with no exact
    /// short decimal form carry their representation artifacts through.
    pub fn from_unit_f64(val: f64, unit: Unit) -> Result<Self, AmountError> {
        if val.is_nan() || val.is_infinite() {
            return Err(AmountError::NotANumber);
        }

        let num = BigDecimal::from_str(&format!("{}", val))?;

        Self::from_unit(num, unit)
    }

    /// Equivalent of calling from_unit with the ether denomination.
    pub fn from_ether(num: BigDecimal) -> Result<Self, AmountError> {
        Self::from_unit(num, Unit::Ether)
    }

    /// Equivalent of calling from_unit_f64 with the ether denomination.
    pub fn from_ether_f64(val: f64) -> Result<Self, AmountError> {
        Self::from_unit_f64(val, Unit::Ether)
    }

    /// Converts the amount to a decimal number in the given denomination.
    /// The result is exact and carries as many fractional digits as the
    /// denomination's scale requires.
    pub fn to_unit(&self, unit: Unit) -> BigDecimal {
        BigDecimal::new(BigInt::from(self.0.clone()), unit.scale())
    }

    /// Converts the amount to a decimal number in the given denomination,
    /// rounded to decimal_places fractional digits.  Ties round half-up,
    /// away from zero.
    pub fn to_unit_rounded(&self, unit: Unit, decimal_places: i64) -> BigDecimal {
        self.to_unit(unit)
            .with_scale_round(decimal_places, RoundingMode::HalfUp)
    }

    /// Equivalent of calling to_unit with the ether denomination.
    pub fn to_ether(&self) -> BigDecimal {
        self.to_unit(Unit::Ether)
    }

    /// Equivalent of calling to_unit_rounded with the ether denomination.
    pub fn to_ether_rounded(&self, decimal_places: i64) -> BigDecimal {
        self.to_unit_rounded(Unit::Ether, decimal_places)
    }

    /// The base unit magnitude.
    pub fn amount(&self) -> &BigUint {
        &self.0
    }

    /// Consumes the amount, returning the base unit magnitude.
    pub fn into_inner(self) -> BigUint {
        self.0
    }

    /// Renders the amount as a minimal `0x`-prefixed hex quantity, the
    /// form used for JSON-RPC parameters.
    pub fn to_hex(&self) -> String {
        format!("0x{}", self.0.to_str_radix(16))
    }

    /// Parses an amount from a hex quantity string.  The `0x` prefix is
    /// optional and hex digits may be in either case.
    pub fn from_hex(value: &str) -> Result<Self, AmountError> {
        let digits = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
            .unwrap_or(value);

        if digits.is_empty() {
            return Err(AmountError::HexDecode(value.to_string()));
        }

        match BigUint::parse_bytes(digits.as_bytes(), 16) {
            Some(magnitude) => Ok(Self(magnitude)),

            None => Err(AmountError::HexDecode(value.to_string())),
        }
    }
}

impl From<BigUint> for Wei {
    fn from(amount: BigUint) -> Self {
        Self(amount)
    }
}

impl From<u64> for Wei {
    fn from(amount: u64) -> Self {
        Self(BigUint::from(amount))
    }
}

impl From<u128> for Wei {
    fn from(amount: u128) -> Self {
        Self(BigUint::from(amount))
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} wei", self.0)
    }
}

impl serde::Serialize for Wei {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Wei {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value: String = serde::Deserialize::deserialize(deserializer)?;

        Self::from_hex(&value).map_err(serde::de::Error::custom)
    }
}
