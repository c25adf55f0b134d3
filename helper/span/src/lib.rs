gotc_utils::index!(ModuleID);

impl ModuleID {
    pub const TRANSIENT: ModuleID = ModuleID::new(u32::MAX);
    pub const DEFAULT: ModuleID = ModuleID::new(u32::MAX - 1);
}

impl Default for ModuleID {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Byte range inside one module. This is the site every diagnostic is
/// attributed to; the checker passes it through untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub lo: u32,
    pub hi: u32,
    pub module: ModuleID,
}

impl Span {
    pub fn new(lo: u32, hi: u32, module: ModuleID) -> Self {
        Self { lo, hi, module }
    }

    pub fn len(&self) -> u32 {
        self.hi - self.lo
    }

    pub fn is_empty(&self) -> bool {
        self.lo == self.hi
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(value: Span) -> Self {
        let len = value.hi - value.lo;
        (value.lo as usize, len as usize).into()
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.module.as_u32(), self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_converts_to_source_span() {
        let span = Span::new(4, 9, ModuleID::root());
        let source: miette::SourceSpan = span.into();
        assert_eq!(source.offset(), 4);
        assert_eq!(source.len(), 5);
        assert_eq!(span.to_string(), "0:4:9");
    }
}
