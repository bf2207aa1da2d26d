//! Core library for the ghostkit toolkit.
//!
//! Turns an Algorand ARC-56 contract spec into a "ghost SDK": a TypeScript file
//! wrapping the contract's typed client with one reader per method, each
//! executed by simulating a `NoOp` create call.
//!
//! The pipeline for one spec file:
//! 1. [`arc56::ContractSpec::load`] reads the spec
//! 2. [`templates::renderer::MethodRenderer`] validates every method and renders it
//! 3. [`client::ClientGenerator`] supplies the typed client body
//! 4. [`assemble::assemble`] stitches client, SDK template and methods together
//! 5. [`build::SdkBuilder`] writes `<Name>SDK.ts` next to the spec

pub mod abi_type;
pub mod arc56;
pub mod assemble;
pub mod build;
pub mod client;
pub mod config;
pub mod error;
pub mod signature;
pub mod templates;
