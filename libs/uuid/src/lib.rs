//! # horizon-uuid
//!
//! A UUID value type for use as an opaque key in events, commands, and
//! read models.
//!
//! ## Format
//!
//! The only accepted text form is the canonical RFC 4122 layout:
//! `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`
//!
//! Example: `819c4ff4-31b4-4519-5d24-3c4a129b8649`
//!
//! - Parsing accepts upper or lower case hex and nothing else (no braces,
//!   no `urn:uuid:` prefix, no unhyphenated form)
//! - Formatting always produces lower case
//! - Parsing does not check version or variant bits
//! - JSON encoding is the canonical text in double quotes
//!
//! Generated IDs are version 4 (random), drawn from the OS random source.

mod error;
mod id;
mod macros;

pub use crate::error::UuidError;
pub use crate::id::Uuid;
