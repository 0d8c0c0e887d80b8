use super::{
    constants::{ADDRESS_SIZE, MAX_ADDRESS_STRING_SIZE},
    EthTypesError,
};

/// An Ethereum account address, stored as raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_SIZE]);

impl Address {
    /// Returns a new Address from a byte slice.  An error is returned if
    /// the number of bytes passed in is not ADDRESS_SIZE.
    pub fn new(bytes: Vec<u8>) -> Result<Self, EthTypesError> {
        if bytes.len() != ADDRESS_SIZE {
            return Err(EthTypesError::InvalidLength {
                expected: MAX_ADDRESS_STRING_SIZE,
                actual: bytes.len() * 2,
            });
        }

        let mut addr = [0; ADDRESS_SIZE];
        addr.copy_from_slice(&bytes);

        Ok(Self(addr))
    }

    /// Creates an Address from its hexadecimal string form.  The `0x`
    /// prefix is optional and hex digits may be in either case.
    pub fn from_hex(value: &str) -> Result<Self, EthTypesError> {
        let digits = strip_hex_prefix(value);

        if digits.len() != MAX_ADDRESS_STRING_SIZE {
            return Err(EthTypesError::InvalidLength {
                expected: MAX_ADDRESS_STRING_SIZE,
                actual: digits.len(),
            });
        }

        let mut addr = [0; ADDRESS_SIZE];

        match hex::decode_to_slice(digits, &mut addr) {
            Ok(_) => Ok(Self(addr)),

            Err(e) => Err(EthTypesError::HexDecode(e)),
        }
    }

    /// Renders the address as a `0x`-prefixed lowercase hex string, the
    /// form expected as a JSON-RPC parameter.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Raw address bytes.
    pub fn bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value: String = serde::Deserialize::deserialize(deserializer)?;

        Self::from_hex(&value).map_err(serde::de::Error::custom)
    }
}

/// Drops a leading `0x` or `0X` marker if one is present.
pub(crate) fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}
