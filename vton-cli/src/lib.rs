//! Environment bootstrap and diagnostics for the AR/VR virtual try-on stack.
//!
//! The application itself (pose estimation, garment warping, synthesis) ships
//! separately as Python code plus model artifacts; this crate prepares and
//! inspects the environment that code runs in:
//!
//! - [`bootstrap`] covers the runtime gate, dependency installation, the
//!   directory skeleton, model artifact verification, and user-store
//!   initialization
//! - [`probe`] is a read-only diagnostic that narrates the layout and
//!   exercises the detection entry point under a bounded wait

pub mod bootstrap;
pub mod commands;
pub mod manifest;
pub mod probe;
