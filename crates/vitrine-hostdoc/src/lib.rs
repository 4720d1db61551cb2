//! Host document generation for the Vitrine gallery.
//!
//! A host document is the HTML shell that loads exactly one built
//! bundle: a mount container, script tags for the pinned shared
//! runtime, the bundle itself, and an onload bootstrap that calls the
//! bundle's global initializer. Generation is a pure function of the
//! app's manifest, so regenerating a document is byte-identical.

mod document;
mod error;

pub use document::{render, write, write_all};
pub use error::{HostDocError, Result};
