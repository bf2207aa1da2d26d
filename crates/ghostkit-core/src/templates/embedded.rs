//! Compile-time embedded templates for SDK generation.
//!
//! Each constant loads a template file from `templates/` via [`include_str!`]. The paths
//! are relative to this source file (`crates/ghostkit-core/src/templates/embedded.rs`).
//!
//! ## Warning
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT modify template files without checking that the placeholders still match
//! what [`super::placeholder`] substitutes.

/// Main SDK body. Uses `{{ARC56_NAME}}` and `{{METHODS}}`.
pub const SDK_INDEX: &str = include_str!("../../../../templates/sdk/index.ts.template");

/// One reader method. Uses `{{METHOD_NAME}}` and `{{METHOD_SIGNATURE}}`.
pub const SDK_METHOD: &str = include_str!("../../../../templates/sdk/method.ts.template");
