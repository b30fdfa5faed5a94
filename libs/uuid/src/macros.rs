//! Macros for defining typed UUID keys.

/// Macro to define a typed key backed by a [`Uuid`](crate::Uuid).
///
/// This generates a newtype wrapper with:
/// - `new()` and `try_new()` to generate a fresh version 4 key
/// - `parse()` to parse from the canonical text form
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` implementations (JSON string)
/// - `Ord`, `Hash`, and other standard traits
///
/// Keys of different types cannot be compared or mixed up, even though they
/// share the same representation.
///
/// # Example
///
/// ```ignore
/// define_uuid!(AggregateId);
/// define_uuid!(CommandId);
///
/// let aggregate = AggregateId::new();
/// let parsed: AggregateId = "819c4ff4-31b4-4519-5d24-3c4a129b8649".parse()?;
/// ```
#[macro_export]
macro_rules! define_uuid {
    ($name:ident) => {
        /// A typed UUID key.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($crate::Uuid);

        impl $name {
            /// Creates a new key with a fresh random UUID.
            ///
            /// # Panics
            ///
            /// Panics if the OS random source fails.
            #[must_use]
            pub fn new() -> Self {
                Self($crate::Uuid::new())
            }

            /// Creates a new key with a fresh random UUID, returning an error
            /// if the OS random source fails.
            pub fn try_new() -> Result<Self, $crate::UuidError> {
                $crate::Uuid::try_new().map(Self)
            }

            /// Wraps an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: $crate::Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn uuid(&self) -> $crate::Uuid {
                self.0
            }

            /// Parses a key from the canonical hyphenated form.
            pub fn parse(s: &str) -> Result<Self, $crate::UuidError> {
                $crate::Uuid::parse(s).map(Self)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::UuidError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(&self.0, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <$crate::Uuid as serde::Deserialize>::deserialize(deserializer).map(Self)
            }
        }

        impl AsRef<$crate::Uuid> for $name {
            fn as_ref(&self) -> &$crate::Uuid {
                &self.0
            }
        }
    };
}
