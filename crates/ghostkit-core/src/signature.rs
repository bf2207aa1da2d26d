//! ABI method signatures.
//!
//! A signature is `name(arg1,arg2,...)ret`, the string whose hash selects the
//! method on chain and which keys the typed client's `Args`/`Types` maps.

use crate::abi_type::{ArgType, ReturnType};
use crate::arc56::MethodDescriptor;
use crate::error::{GhostkitError, Result};

/// Derives the canonical signature string for a method.
pub trait SignatureEncoder {
    fn signature(&self, method: &MethodDescriptor) -> Result<String>;
}

/// Encoder following ARC-4: every type is parsed and re-emitted canonically.
#[derive(Debug, Clone, Copy, Default)]
pub struct Arc4Signature;

impl SignatureEncoder for Arc4Signature {
    fn signature(&self, method: &MethodDescriptor) -> Result<String> {
        let invalid = |type_str: &str, reason: String| GhostkitError::InvalidAbiType {
            method: method.name.clone(),
            type_str: type_str.to_string(),
            reason,
        };

        let args = method
            .args
            .iter()
            .map(|arg| {
                arg.type_str
                    .parse::<ArgType>()
                    .map(|t| t.to_string())
                    .map_err(|e| invalid(&arg.type_str, e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        let returns = method
            .returns
            .type_str
            .parse::<ReturnType>()
            .map_err(|e| invalid(&method.returns.type_str, e.to_string()))?;

        Ok(format!("{}({}){}", method.name, args.join(","), returns))
    }
}
