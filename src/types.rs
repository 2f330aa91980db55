use core::array::TryFromSliceError;
use core::ops::Deref;
use core::{fmt, str};

fn nibble(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}

macro_rules! word {
    ($i:ident, $doc:expr) => {
        #[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[doc = $doc]
        pub struct $i([u8; 32]);

        impl $i {
            /// Width of the word in bytes
            pub const LEN: usize = 32;

            pub const fn new(bytes: [u8; 32]) -> Self {
                Self(bytes)
            }

            pub const fn zeroed() -> Self {
                Self([0; 32])
            }
        }

        impl Deref for $i {
            type Target = [u8; 32];

            fn deref(&self) -> &[u8; 32] {
                &self.0
            }
        }

        impl AsRef<[u8]> for $i {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl TryFrom<&[u8]> for $i {
            type Error = TryFromSliceError;

            fn try_from(bytes: &[u8]) -> Result<Self, TryFromSliceError> {
                <[u8; 32]>::try_from(bytes).map(Self)
            }
        }

        impl fmt::LowerHex for $i {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if f.alternate() {
                    f.write_str("0x")?;
                }
                self.0.iter().try_for_each(|b| write!(f, "{:02x}", b))
            }
        }

        impl fmt::Debug for $i {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:#x}", self)
            }
        }

        impl fmt::Display for $i {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:#x}", self)
            }
        }

        impl str::FromStr for $i {
            type Err = &'static str;

            /// Parse 64 hex digits, with or without a `0x` prefix.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                const ERR: &str = "expected 32 hex encoded bytes";

                let digits = s.strip_prefix("0x").unwrap_or(s).as_bytes();
                if digits.len() != 2 * Self::LEN {
                    return Err(ERR);
                }

                let mut bytes = [0u8; 32];
                for (byte, pair) in bytes.iter_mut().zip(digits.chunks_exact(2)) {
                    let hi = nibble(pair[0]).ok_or(ERR)?;
                    let lo = nibble(pair[1]).ok_or(ERR)?;
                    *byte = hi << 4 | lo;
                }

                Ok(Self(bytes))
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $i {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $i {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                use serde::de::Error;
                let s: std::borrow::Cow<'de, str> = serde::Deserialize::deserialize(deserializer)?;
                s.parse().map_err(D::Error::custom)
            }
        }
    };
}

word!(
    Leaf,
    "Fixed-width big-endian encoding of one identifier, zero-padded on the left."
);
word!(Node, "Keccak-256 digest stored in a tree layer.");
