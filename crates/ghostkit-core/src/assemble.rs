//! Assembly of the final SDK document.
//!
//! The typed client is inlined ahead of the SDK class with its `Client` and
//! `Factory` classes un-exported, so the generated file exposes only the SDK.

use crate::error::{GhostkitError, Result};
use crate::templates::placeholder;
use crate::templates::renderer::substitute;

/// Drop the `export` marker from the contract's client and factory classes.
///
/// Only the first exact occurrence of each declaration is rewritten.
pub fn unexport_client(client: &str, name: &str) -> String {
    [format!("{name}Client"), format!("{name}Factory")]
        .iter()
        .fold(client.to_string(), |acc, class| {
            acc.replacen(&format!("export class {class}"), &format!("class {class}"), 1)
        })
}

/// Build the complete document from its parts.
///
/// The client body comes first, then the main template with `{{ARC56_NAME}}`
/// filled in. `{{METHODS}}` is then replaced everywhere by the fragments
/// joined with newlines.
pub fn assemble(client: &str, name: &str, index_template: &str, fragments: &[String]) -> String {
    let pieces = [
        unexport_client(client, name),
        substitute(index_template, &[(placeholder::ARC56_NAME, name)]),
    ];
    let methods = fragments.join("\n");
    pieces.join("\n").replace(placeholder::METHODS, &methods)
}

/// Fail if any placeholder token is still present.
pub fn ensure_resolved(document: &str) -> Result<()> {
    match placeholder::ALL.iter().copied().find(|token| document.contains(token)) {
        Some(token) => Err(GhostkitError::UnresolvedPlaceholder(token)),
        None => Ok(()),
    }
}
