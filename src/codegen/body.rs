//! Body emitter.
//!
//! Dispatch role: build the index, load the stream kernel from the action,
//! launch it over `(end - start) / block_size` groups with a wrapped view
//! per buffer, then block on `Synchronize()`. `block_size` is an ambient
//! field of the generated class, embedded as a literal identifier.
//!
//! ParallelFor role: a thin pass-through into `DispatchKernel` of the same
//! arity via a fresh `AcceleratorHandler`.

use std::fmt::Write;

use crate::codegen::{FamilyConfig, Role};
use crate::ir::OverloadIr;

pub fn emit(ir: &OverloadIr, cfg: &FamilyConfig) -> String {
    match cfg.role {
        Role::Dispatch => emit_dispatch(ir, cfg),
        Role::ParallelFor => emit_parallel_for(ir),
    }
}

fn emit_dispatch(ir: &OverloadIr, cfg: &FamilyConfig) -> String {
    let mut s = String::new();
    s.push_str("{\n");
    s.push_str("    var idx = new Index();\n\n");
    s.push_str("    var kernel = accelerator.LoadStreamKernel(action);\n\n");
    s.push_str("    kernel(((end - start) / block_size, block_size), idx,\n");
    let arity = ir.arity();
    for (k, b) in ir.buffers.iter().enumerate() {
        let _ = write!(
            s,
            "        new {}<{}>({}.View)",
            cfg.wrapper_at(k, arity),
            b.symbol,
            b.name
        );
        s.push_str(if k + 1 == arity { ");\n" } else { ",\n" });
    }
    s.push_str("\n    Synchronize();\n");
    s.push_str("}\n\n");
    s
}

fn emit_parallel_for(ir: &OverloadIr) -> String {
    let mut s = String::new();
    s.push_str("{\n");
    s.push_str("    var handler = new AcceleratorHandler();\n");
    s.push_str("    handler.DispatchKernel(start, end, ");
    for b in &ir.buffers {
        let _ = write!(s, "{}, ", b.name);
    }
    s.push_str("action);\n");
    s.push_str("}\n\n");
    s
}

// ------------------------------- Tests ------------------------------------ //
