//! Houses all JSON command parameter types.

use std::fmt;

use crate::ethtypes::quantity;

/// Selects the block a state query executes against.  Either one of the
/// named tags or an explicit block number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    /// The most recent block.
    Latest,
    /// The lowest numbered block available.
    Earliest,
    /// The pending state.
    Pending,
    /// A specific block number.
    Number(u64),
}

impl BlockTag {
    /// The wire form of the selector, a named tag or a hex quantity.
    pub fn code(&self) -> String {
        match *self {
            BlockTag::Latest => "latest".to_string(),
            BlockTag::Earliest => "earliest".to_string(),
            BlockTag::Pending => "pending".to_string(),
            BlockTag::Number(number) => quantity::encode(number),
        }
    }
}

impl serde::Serialize for BlockTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.code())
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.code())
    }
}
