//! Signature emitter: the generic declaration line plus constraint clauses.
//!
//! Invariant: angle-bracket type-parameters, buffer parameters, and `where`
//! clauses always count the same. The IR guarantees it structurally; the
//! action type is derived from the same list, never composed independently.

use std::fmt::Write;

use crate::codegen::{FamilyConfig, Role};
use crate::ir::OverloadIr;

pub fn emit(ir: &OverloadIr, cfg: &FamilyConfig) -> String {
    let mut s = String::new();

    let decl = match cfg.role {
        Role::Dispatch => "internal void DispatchKernel",
        Role::ParallelFor => "public static void ParallelFor",
    };
    let _ = write!(s, "{}<{}>(int start, int end, ", decl, ir.type_params.join(", "));

    for b in &ir.buffers {
        let _ = write!(s, "Buffer<{}> {}, ", b.symbol, b.name);
    }

    // One action slot per buffer type-parameter, plus the leading index.
    s.push_str("Action<Index");
    for (k, tp) in ir.type_params.iter().enumerate() {
        let _ = write!(s, ", {}<{}>", cfg.wrapper_at(k, ir.arity()), tp);
    }
    s.push_str("> action)");

    for c in &ir.constraints {
        let _ = write!(s, "\n    where {} : unmanaged", c);
    }
    s.push('\n');

    s
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::compose;

    #[test]
    fn arity_one_dispatch_signature_is_exact() {
        let cfg = FamilyConfig::new(Role::Dispatch);
        let ir = compose(0, 13).unwrap();
        assert_eq!(
            emit(&ir, &cfg),
            "internal void DispatchKernel<T>(int start, int end, Buffer<T> buf1, \
             Action<Index, GPUArray<T>> action)\n    where T : unmanaged\n"
        );
    }

    #[test]
    fn type_params_buffers_and_constraints_count_equal() {
        let cfg = FamilyConfig::new(Role::ParallelFor);
        for i in 0..13 {
            let ir = compose(i, 13).unwrap();
            let sig = emit(&ir, &cfg);
            let generics = sig.split('<').nth(1).unwrap().split('>').next().unwrap();
            assert_eq!(generics.split(", ").count(), i + 1);
            assert_eq!(sig.matches("Buffer<").count(), i + 1);
            assert_eq!(sig.matches(": unmanaged").count(), i + 1);
        }
    }

    #[test]
    fn action_type_covers_every_type_parameter() {
        let cfg = FamilyConfig::new(Role::Dispatch);
        let ir = compose(2, 13).unwrap();
        let sig = emit(&ir, &cfg);
        assert!(sig.contains("Action<Index, GPUArray<T>, GPUArray<U>, GPUArray<V>> action"));
    }
}
