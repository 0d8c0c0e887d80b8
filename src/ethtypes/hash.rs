use super::{
    address::strip_hex_prefix,
    constants::{HASH_SIZE, MAX_HASH_STRING_SIZE},
    EthTypesError,
};

/// A block or transaction hash, stored as raw bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// Returns a new Hash from a byte slice.  An error is returned if
    /// the number of bytes passed in is not HASH_SIZE.
    pub fn new(bytes: Vec<u8>) -> Result<Self, EthTypesError> {
        if bytes.len() != HASH_SIZE {
            return Err(EthTypesError::InvalidLength {
                expected: MAX_HASH_STRING_SIZE,
                actual: bytes.len() * 2,
            });
        }

        let mut hash = [0; HASH_SIZE];
        hash.copy_from_slice(&bytes);

        Ok(Self(hash))
    }

    /// Creates a Hash from its hexadecimal string form.  The `0x` prefix
    /// is optional and hex digits may be in either case.
    pub fn from_hex(value: &str) -> Result<Self, EthTypesError> {
        let digits = strip_hex_prefix(value);

        if digits.len() != MAX_HASH_STRING_SIZE {
            return Err(EthTypesError::InvalidLength {
                expected: MAX_HASH_STRING_SIZE,
                actual: digits.len(),
            });
        }

        let mut hash = [0; HASH_SIZE];

        match hex::decode_to_slice(digits, &mut hash) {
            Ok(_) => Ok(Self(hash)),

            Err(e) => Err(EthTypesError::HexDecode(e)),
        }
    }

    /// Renders the hash as a `0x`-prefixed lowercase hex string.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Raw hash bytes.
    pub fn bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }
}

impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::fmt::Debug for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl serde::Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value: String = serde::Deserialize::deserialize(deserializer)?;

        Self::from_hex(&value).map_err(serde::de::Error::custom)
    }
}
