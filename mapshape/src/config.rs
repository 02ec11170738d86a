//! Decoder configuration.

/// How mapping keys are matched against struct field names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FieldMatching {
    /// Exact match first, then a Unicode-lowercase comparison.
    #[default]
    CaseInsensitive,
    /// Only exact matches.
    Exact,
}

/// Knobs for a [`Decoder`](crate::Decoder).
///
/// ```
/// use mapshape::{DecoderConfig, FieldMatching};
///
/// let config = DecoderConfig::new()
///     .field_matching(FieldMatching::Exact)
///     .error_unused(true);
/// assert!(config.error_unused);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// How keys find their fields.
    pub field_matching: FieldMatching,

    /// Accept loosely typed scalars: bools as numbers and strings, numbers as
    /// bools, numeric and boolean strings, and single values as one-element
    /// lists.
    pub weakly_typed_input: bool,

    /// Report input keys that matched no field as errors.
    pub error_unused: bool,

    /// Report declared fields that no input key covered as errors.
    pub error_unset: bool,

    /// Reset containers and pointers before decoding into them, instead of
    /// merging into what the destination already holds. Null input resets
    /// the slot to its zero value.
    pub zero_fields: bool,
}

impl DecoderConfig {
    /// The default configuration.
    pub const fn new() -> Self {
        Self {
            field_matching: FieldMatching::CaseInsensitive,
            weakly_typed_input: false,
            error_unused: false,
            error_unset: false,
            zero_fields: false,
        }
    }

    /// Sets [`DecoderConfig::field_matching`].
    pub const fn field_matching(mut self, field_matching: FieldMatching) -> Self {
        self.field_matching = field_matching;
        self
    }

    /// Sets [`DecoderConfig::weakly_typed_input`].
    pub const fn weakly_typed_input(mut self, weakly_typed_input: bool) -> Self {
        self.weakly_typed_input = weakly_typed_input;
        self
    }

    /// Sets [`DecoderConfig::error_unused`].
    pub const fn error_unused(mut self, error_unused: bool) -> Self {
        self.error_unused = error_unused;
        self
    }

    /// Sets [`DecoderConfig::error_unset`].
    pub const fn error_unset(mut self, error_unset: bool) -> Self {
        self.error_unset = error_unset;
        self
    }

    /// Sets [`DecoderConfig::zero_fields`].
    pub const fn zero_fields(mut self, zero_fields: bool) -> Self {
        self.zero_fields = zero_fields;
        self
    }
}
