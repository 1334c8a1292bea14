// Strongly-typed IR for codegen. One value per overload; no rendered text here.

/// Everything the emitters need to render one overload of the family.
///
/// Built fresh per arity index, immutable once built, discarded after its
/// text is emitted. Fully derivable from the arity index alone, which is
/// what makes regeneration byte-identical.
#[derive(Debug, Clone)]
pub struct OverloadIr {
    /// 0-based: this overload takes `arity_index + 1` typed buffers.
    pub arity_index: usize,
    /// Counting word for the buffer count, used in the summary line.
    pub cardinal: &'static str,
    /// Type-parameter symbols in declaration order.
    pub type_params: Vec<&'static str>,
    /// One descriptor per type-parameter, position-aligned.
    pub buffers: Vec<BufferParam>,
    /// One `unmanaged` constraint per symbol, in type-parameter order.
    pub constraints: Vec<&'static str>,
}

#[derive(Debug, Clone)]
pub struct BufferParam {
    pub name: String,            // buf1, buf2, ...
    pub symbol: &'static str,
    pub ordinal: &'static str,   // documentation only
}

impl OverloadIr {
    /// Number of typed buffers this overload accepts.
    pub fn arity(&self) -> usize {
        self.arity_index + 1
    }
}
