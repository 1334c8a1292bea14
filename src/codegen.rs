//! Family generator: arity range → concatenated overload source text.
//!
//! One driver parameterized by role and arity range, replacing the two
//! near-duplicate generators of the reference system. Each overload is
//! rendered independently (the IR carries no state across arities), so the
//! per-arity renders run on rayon; an indexed `collect` keeps the blocks in
//! ascending arity order for the single concatenation.
//!
//! The whole family is assembled in memory and handed to the caller as one
//! string. Nothing here touches the file system, so a failed run can never
//! leave a partial artifact behind.
pub mod body;
pub mod doc;
pub mod sig;

use rayon::prelude::*;

use crate::compose::compose;
use crate::ir::OverloadIr;
use crate::names::{GenError, MAX_SUPPORTED_ARITY};

/// Observed arity range of the reference generators.
pub const DEFAULT_MAX_ARITY: usize = 13;

/// View wrapper applied to buffers in the action type and the dispatch body.
pub const DEFAULT_VIEW_WRAPPER: &str = "GPUArray";

/// Which member of the overload family we are generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// `internal void DispatchKernel<...>` — loads and launches the kernel.
    Dispatch,
    /// `public static void ParallelFor<...>` — thin forwarder into
    /// `DispatchKernel` of the same arity.
    ParallelFor,
}

#[derive(Debug, Clone)]
pub struct FamilyConfig {
    pub role: Role,
    /// Number of overloads to emit: one per arity in `1..=max_arity`.
    pub max_arity: usize,
    /// Wrapper for the action's final buffer slot. The downstream kernel
    /// contract is ambiguous about whether the last buffer is in-out or
    /// out-only, so the wrapper is a knob instead of a hard-coded choice;
    /// the observed default wraps every position identically.
    pub last_wrapper: String,
}

impl FamilyConfig {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            max_arity: DEFAULT_MAX_ARITY,
            last_wrapper: DEFAULT_VIEW_WRAPPER.to_string(),
        }
    }

    fn validate(&self) -> Result<(), GenError> {
        if self.max_arity == 0 {
            return Err(GenError::MaxArityZero);
        }
        if self.max_arity > MAX_SUPPORTED_ARITY {
            return Err(GenError::MaxArityTooLarge { requested: self.max_arity });
        }
        Ok(())
    }

    /// Wrapper for buffer position `k` out of `arity`.
    pub(crate) fn wrapper_at(&self, k: usize, arity: usize) -> &str {
        if k + 1 == arity { &self.last_wrapper } else { DEFAULT_VIEW_WRAPPER }
    }
}

/// Render the doc block, signature, and body of one overload.
pub fn render_overload(arity_index: usize, cfg: &FamilyConfig) -> Result<String, GenError> {
    let ir: OverloadIr = compose(arity_index, cfg.max_arity)?;
    let mut block = String::new();
    block.push_str(&doc::emit(&ir, cfg));
    block.push_str(&sig::emit(&ir, cfg));
    block.push_str(&body::emit(&ir, cfg));
    Ok(block)
}

/// Generate the full family for `cfg`, in ascending arity order.
///
/// Validates the configuration before rendering anything: either the whole
/// family comes back, or an error and no text at all.
pub fn generate_family(cfg: &FamilyConfig) -> Result<String, GenError> {
    cfg.validate()?;
    let blocks = (0..cfg.max_arity)
        .into_par_iter()
        .map(|i| render_overload(i, cfg))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(blocks.concat())
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn dispatch_cfg(max_arity: usize) -> FamilyConfig {
        FamilyConfig { max_arity, ..FamilyConfig::new(Role::Dispatch) }
    }

    #[test]
    fn regenerating_is_byte_identical() {
        let cfg = dispatch_cfg(13);
        assert_eq!(generate_family(&cfg).unwrap(), generate_family(&cfg).unwrap());

        let cfg = FamilyConfig { max_arity: 16, ..FamilyConfig::new(Role::ParallelFor) };
        assert_eq!(generate_family(&cfg).unwrap(), generate_family(&cfg).unwrap());
    }

    #[test]
    fn family_splits_into_max_arity_blocks_in_ascending_order() {
        let src = generate_family(&dispatch_cfg(13)).unwrap();
        let decl = Regex::new(r"(?m)^internal void DispatchKernel<([^>]*)>").unwrap();
        let arities: Vec<usize> = decl
            .captures_iter(&src)
            .map(|c| c[1].split(", ").count())
            .collect();
        assert_eq!(arities.len(), 13);
        assert_eq!(arities, (1..=13).collect::<Vec<_>>());
    }

    #[test]
    fn single_overload_family_only_speaks_of_first() {
        let src = generate_family(&dispatch_cfg(1)).unwrap();
        assert_eq!(src.matches("internal void DispatchKernel<").count(), 1);
        assert!(src.contains("DispatchKernel<T>"));
        assert!(src.contains("first"));
        assert!(!src.contains("second"));
        assert_eq!(src.matches("where T : unmanaged").count(), 1);
    }

    #[test]
    fn full_width_family_ends_at_the_sixteenth_position() {
        let src = generate_family(&dispatch_cfg(16)).unwrap();
        let last = src.rsplit("internal void DispatchKernel<").next().unwrap();
        assert!(last.contains("GPUArray<I>"));
        assert!(last.contains("buf16.View"));
        assert!(src.contains("sixteenth"));
        assert!(!src.contains("seventeen"));
    }

    #[test]
    fn oversized_family_aborts_with_no_output() {
        let err = generate_family(&dispatch_cfg(17)).unwrap_err();
        assert_eq!(err, GenError::MaxArityTooLarge { requested: 17 });
    }

    #[test]
    fn parallel_for_family_forwards_every_buffer() {
        let cfg = FamilyConfig { max_arity: 3, ..FamilyConfig::new(Role::ParallelFor) };
        let src = generate_family(&cfg).unwrap();
        assert_eq!(src.matches("public static void ParallelFor<").count(), 3);
        assert!(src.contains("handler.DispatchKernel(start, end, buf1, buf2, buf3, action);"));
    }

    #[test]
    fn last_wrapper_knob_reaches_type_and_body() {
        let cfg = FamilyConfig {
            last_wrapper: "GPUArrayOut".to_string(),
            max_arity: 2,
            ..FamilyConfig::new(Role::Dispatch)
        };
        let src = generate_family(&cfg).unwrap();
        assert!(src.contains("Action<Index, GPUArray<T>, GPUArrayOut<U>> action"));
        assert!(src.contains("new GPUArrayOut<U>(buf2.View));"));
        // earlier positions are untouched
        assert!(src.contains("new GPUArray<T>(buf1.View),"));
    }
}
