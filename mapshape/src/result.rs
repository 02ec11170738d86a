use alloc::string::String;
use alloc::vec::Vec;

use crate::{DecodeError, DecodeErrors};

/// Which input keys a decode used, and which it did not.
///
/// Entries are rendered paths (`server.port`, `servers[0].host`), in
/// traversal order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Metadata {
    /// Input keys that matched a struct field
    pub keys: Vec<String>,
    /// Input keys that matched no field
    pub unused: Vec<String>,
    /// Declared fields that no input key covered
    pub unset: Vec<String>,
}

/// The full outcome of [`decode_partial`](crate::decode_partial).
#[derive(Clone, Debug, PartialEq)]
pub struct DecodeResult {
    /// Every error, in traversal order
    pub errors: Vec<DecodeError>,

    /// Errors were reported and nothing at all was assigned.
    ///
    /// `false` whenever `errors` is empty, and whenever at least one scalar,
    /// pointer or dynamic value was assigned, a list was resized to a
    /// non-empty input sequence, or a map had an entry inserted.
    pub total_failure: bool,

    /// Key usage
    pub metadata: Metadata,
}

impl DecodeResult {
    /// Whether the decode reported no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Whether some, but not all, of the input made it into the destination.
    pub fn is_partial(&self) -> bool {
        !self.errors.is_empty() && !self.total_failure
    }

    /// Collapses into the single-error form [`decode`](crate::decode) returns.
    pub fn into_result(self) -> Result<Metadata, DecodeErrors> {
        match DecodeErrors::new(self.errors) {
            Some(errors) => Err(errors),
            None => Ok(self.metadata),
        }
    }
}
