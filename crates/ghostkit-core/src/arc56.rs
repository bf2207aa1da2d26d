//! ARC-56 contract specification loading.
//!
//! Only the parts of an ARC-56 document the SDK generator reads are modelled:
//! the contract name and the ordered method list. Every other field
//! (`structs`, `state`, `bareActions`, `networks`, ...) is ignored on load.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GhostkitError, Result};

/// A contract described by an ARC-56 document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    /// Methods in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

/// One ABI method of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default)]
    pub args: Vec<MethodArg>,
    pub returns: MethodReturns,
    #[serde(default)]
    pub actions: MethodActions,
    /// ARC-56 omits the field for state-mutating methods.
    #[serde(default)]
    pub readonly: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodArg {
    /// ARC-4 type string, e.g. `uint64` or `(uint64,address)`.
    #[serde(rename = "type")]
    pub type_str: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Name of the struct this tuple argument maps to, if any.
    #[serde(rename = "struct", default, skip_serializing_if = "Option::is_none")]
    pub struct_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodReturns {
    #[serde(rename = "type")]
    pub type_str: String,
    #[serde(rename = "struct", default, skip_serializing_if = "Option::is_none")]
    pub struct_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// The on-completion actions a method may be called with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodActions {
    /// Actions allowed when the call creates the application.
    #[serde(default)]
    pub create: Vec<OnComplete>,
    /// Actions allowed on an existing application.
    #[serde(default)]
    pub call: Vec<OnComplete>,
}

/// Application call on-completion type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OnComplete {
    NoOp,
    OptIn,
    CloseOut,
    ClearState,
    UpdateApplication,
    DeleteApplication,
}

impl MethodDescriptor {
    /// Whether the method can be reached through a plain `NoOp` create call.
    pub fn supports_noop_create(&self) -> bool {
        self.actions.create.contains(&OnComplete::NoOp)
    }
}

impl ContractSpec {
    /// Parse a spec from its JSON text. `path` is used for error context only.
    pub fn from_json(json: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GhostkitError::SpecParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load a spec from an `*.arc56.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| GhostkitError::SpecNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        let spec = Self::from_json(&contents, path)?;
        tracing::debug!(
            contract = %spec.name,
            methods = spec.methods.len(),
            "loaded contract spec"
        );
        Ok(spec)
    }
}
