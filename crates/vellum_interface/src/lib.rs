//! Trait definitions for the Vellum creator workbench.
//!
//! This crate provides the seam between the generation workflows and
//! whatever remote service produces the text.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::VellumDriver;
