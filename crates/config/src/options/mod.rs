#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum RawUnsignedRange {
    #[default]
    #[serde(alias = "exact")]
    Exact,
    #[serde(alias = "signed")]
    Signed,
}

/// Which range an untyped constant must fall into when it is assigned to an
/// unsigned integer of `N` bits.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum UnsignedRange {
    /// `[0, 2^N - 1]`.
    #[default]
    Exact,
    /// `[-2^(N-1), 2^(N-1) - 1]`, the same range as a signed integer of
    /// the same width.
    Signed,
}

impl From<RawUnsignedRange> for UnsignedRange {
    fn from(val: RawUnsignedRange) -> Self {
        match val {
            RawUnsignedRange::Exact => UnsignedRange::Exact,
            RawUnsignedRange::Signed => UnsignedRange::Signed,
        }
    }
}
