//! Documentation emitter: one XML doc block per overload.
//!
//! Entry order must exactly mirror the declaration order of the signature
//! (start, end, buffers by position, action, then type-parameters by
//! position). A mismatch would still generate, but the published docs
//! would describe a parameter list the method does not have.

use std::fmt::Write;

use crate::codegen::{FamilyConfig, Role};
use crate::ir::OverloadIr;

pub fn emit(ir: &OverloadIr, cfg: &FamilyConfig) -> String {
    let mut s = String::new();

    s.push_str("/// <summary>\n");
    match cfg.role {
        Role::Dispatch => {
            let _ = writeln!(s, "/// Dispatches a kernel with {} parameters.", ir.cardinal);
        }
        Role::ParallelFor => {
            s.push_str("/// Creates a GPU parallel for loop.\n");
            s.push_str("/// The body of the kernel is run on a GPU target.\n");
            let _ = writeln!(
                s,
                "/// This overload specifies that {} arrays are used on the GPU.",
                ir.cardinal
            );
        }
    }
    s.push_str("/// </summary>\n");

    s.push_str("/// <param name=\"start\">The start of the loop, inclusive.</param>\n");
    s.push_str("/// <param name=\"end\">The end of the loop, exclusive.</param>\n");
    for b in &ir.buffers {
        let _ = writeln!(
            s,
            "/// <param name=\"{}\">The {} buffer to run the kernel with.</param>",
            b.name, b.ordinal
        );
    }
    s.push_str("/// <param name=\"action\">The kernel to run on the GPU.</param>\n");

    for b in &ir.buffers {
        let _ = writeln!(
            s,
            "/// <typeparam name=\"{}\">The base type of the {} argument. Must be an unmanaged type.</typeparam>",
            b.symbol, b.ordinal
        );
    }

    s
}

// ------------------------------- Tests ------------------------------------ //
