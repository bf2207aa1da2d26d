//! Per-method validation and rendering.
//!
//! Every method of a ghost SDK is executed through a simulated `NoOp` create
//! call against app id 0, so each method must allow `NoOp` on create and be
//! read-only. The first method that does not aborts the whole render: a client
//! missing one of the contract's methods is not emitted.
//!
//! ## Usage
//!
//! ```ignore
//! use crate::templates::{renderer::MethodRenderer, Templates};
//!
//! let templates = Templates::embedded();
//! let fragments = MethodRenderer::new(&templates.method).render(&spec.methods)?;
//! ```

use crate::arc56::MethodDescriptor;
use crate::error::{GhostkitError, Result};
use crate::signature::{Arc4Signature, SignatureEncoder};

use super::placeholder;

/// Check that a method can be served by the ghost SDK.
pub fn validate(method: &MethodDescriptor) -> Result<()> {
    if !method.supports_noop_create() {
        return Err(GhostkitError::NonCreatableMethod(method.name.clone()));
    }
    if !method.readonly {
        return Err(GhostkitError::NonReadonlyMethod(method.name.clone()));
    }
    Ok(())
}

/// Replace every occurrence of each `(token, value)` pair, in order.
pub fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(template.to_string(), |acc, (token, value)| acc.replace(token, value))
}

/// Renders the method template once per contract method.
pub struct MethodRenderer<'a, E = Arc4Signature> {
    template: &'a str,
    encoder: E,
}

impl<'a> MethodRenderer<'a, Arc4Signature> {
    /// Create a renderer using ARC-4 signatures.
    pub fn new(template: &'a str) -> Self {
        Self::with_encoder(template, Arc4Signature)
    }
}

impl<'a, E: SignatureEncoder> MethodRenderer<'a, E> {
    pub fn with_encoder(template: &'a str, encoder: E) -> Self {
        Self { template, encoder }
    }

    /// Validate and render a single method.
    pub fn render_one(&self, method: &MethodDescriptor) -> Result<String> {
        validate(method)?;
        let signature = self.encoder.signature(method)?;
        tracing::debug!(method = %method.name, %signature, "rendering method");
        Ok(substitute(
            self.template,
            &[
                (placeholder::METHOD_NAME, method.name.as_str()),
                (placeholder::METHOD_SIGNATURE, signature.as_str()),
            ],
        ))
    }

    /// Render all methods in order, stopping at the first invalid one.
    pub fn render(&self, methods: &[MethodDescriptor]) -> Result<Vec<String>> {
        methods.iter().map(|m| self.render_one(m)).collect()
    }
}
