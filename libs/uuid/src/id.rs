//! The UUID value type.
//!
//! A `Uuid` is an opaque 128-bit value. It can be generated (version 4),
//! parsed from and formatted to the canonical hyphenated text, and encoded to
//! or decoded from a JSON string.

use rand::rngs::OsRng;
use rand::TryRngCore;

use crate::UuidError;

/// Length of the canonical text form.
const TEXT_LEN: usize = 36;

/// Offsets of the hyphens in the canonical text form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// A 128-bit universally unique identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uuid(::uuid::Uuid);

impl Uuid {
    /// The all-zero UUID.
    pub const NIL: Self = Self(::uuid::Uuid::nil());

    /// Generates a new random (version 4) UUID.
    ///
    /// # Panics
    ///
    /// Panics if the OS random source fails. Use [`Uuid::try_new`] to get
    /// the failure as an error instead.
    #[must_use]
    pub fn new() -> Self {
        match Self::try_new() {
            Ok(id) => id,
            Err(err) => {
                tracing::error!(error = %err, "cannot generate UUID");
                panic!("cannot generate UUID: {err}");
            }
        }
    }

    /// Generates a new random (version 4) UUID, returning an error if the
    /// OS random source fails.
    pub fn try_new() -> Result<Self, UuidError> {
        let mut bytes = [0u8; 16];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| UuidError::RandomSource(e.to_string()))?;

        Ok(Self(::uuid::Builder::from_random_bytes(bytes).into_uuid()))
    }

    /// Parses a UUID from its canonical hyphenated form.
    ///
    /// Hex digits may be upper or lower case. Version and variant bits are
    /// not validated.
    pub fn parse(s: &str) -> Result<Self, UuidError> {
        let text = s.as_bytes();
        if text.len() != TEXT_LEN {
            return Err(UuidError::parse(
                s,
                format!("expected {TEXT_LEN} characters, got {}", text.len()),
            ));
        }

        if let Some(&pos) = HYPHENS.iter().find(|&&pos| text[pos] != b'-') {
            return Err(UuidError::parse(s, format!("expected '-' at position {pos}")));
        }

        ::uuid::Uuid::try_parse(s)
            .map(Self)
            .map_err(|e| UuidError::parse(s, e.to_string()))
    }

    /// Returns true if this is the all-zero UUID.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    /// Returns the version number held in the high nibble of byte 6.
    #[must_use]
    pub fn version(&self) -> u8 {
        self.0.as_bytes()[6] >> 4
    }

    /// Returns true if the variant bits mark the RFC 4122 layout (`10`).
    #[must_use]
    pub fn is_rfc4122_variant(&self) -> bool {
        self.0.get_variant() == ::uuid::Variant::RFC4122
    }

    /// Encodes the UUID as a JSON string literal.
    #[must_use]
    pub fn marshal_json(&self) -> String {
        format!("\"{self}\"")
    }

    /// Decodes a JSON string literal into `self`.
    ///
    /// `self` is only overwritten on success.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), UuidError> {
        let [b'"', inner @ .., b'"'] = data else {
            return Err(UuidError::Format {
                input: String::from_utf8_lossy(data).into_owned(),
            });
        };

        let value = std::str::from_utf8(inner)
            .map_err(|_| UuidError::parse(&String::from_utf8_lossy(inner), "not valid UTF-8"))?;

        *self = Self::parse(value)?;
        Ok(())
    }
}

/// Defaults to [`Uuid::NIL`].
impl Default for Uuid {
    fn default() -> Self {
        Self::NIL
    }
}

impl std::fmt::Display for Uuid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl std::str::FromStr for Uuid {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<::uuid::Uuid> for Uuid {
    fn from(value: ::uuid::Uuid) -> Self {
        Self(value)
    }
}

impl From<Uuid> for ::uuid::Uuid {
    fn from(value: Uuid) -> Self {
        value.0
    }
}

impl serde::Serialize for Uuid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Uuid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
