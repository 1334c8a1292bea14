//! Arity composer: arity index → [`OverloadIr`].
//!
//! Pure transformation, no side effects. All range validation happens here,
//! before any text exists, so a bad configuration can never leak a partial
//! overload into the output.

use crate::ir::{BufferParam, OverloadIr};
use crate::names::{self, GenError, MAX_SUPPORTED_ARITY};

/// Build the IR for the overload at `arity_index` within a family of
/// `max_arity` overloads.
///
/// Contract: `arity_index < max_arity <= 16`. Violations are fatal
/// configuration errors, not recoverable conditions.
pub fn compose(arity_index: usize, max_arity: usize) -> Result<OverloadIr, GenError> {
    if max_arity == 0 {
        return Err(GenError::MaxArityZero);
    }
    if max_arity > MAX_SUPPORTED_ARITY {
        return Err(GenError::MaxArityTooLarge { requested: max_arity });
    }
    if arity_index >= max_arity {
        return Err(GenError::ArityOutOfRange { index: arity_index, max_arity });
    }

    let arity = arity_index + 1;
    let mut type_params = Vec::with_capacity(arity);
    let mut buffers = Vec::with_capacity(arity);
    for k in 0..arity {
        let name = names::position(k)?;
        type_params.push(name.symbol);
        buffers.push(BufferParam {
            name: format!("buf{}", k + 1),
            symbol: name.symbol,
            ordinal: name.ordinal,
        });
    }

    // Identical constraint text for every symbol, same order as the
    // type-parameter list.
    let constraints = type_params.clone();

    Ok(OverloadIr {
        arity_index,
        cardinal: names::cardinal(arity_index)?,
        type_params,
        buffers,
        constraints,
    })
}

// ------------------------------- Tests ------------------------------------ //
