//! # dom_core
//!
//! UI-agnostic DOM port surface for the focus containment engine.
//!
//! This crate provides the fundamental building blocks shared by the scanner
//! and the lock engine:
//! - [`NodeId`]: a generic, opaque identifier for DOM nodes
//! - [`DomPort`]: the narrow read/write interface to the host document
//! - [`FocusOptions`]: options applied to engine-initiated focus moves
//! - marker attribute names ([`marks`]) the engine recognizes on elements
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any real DOM implementation or browser binding
//! - Layout or rendering systems
//! - Platform-specific APIs
//!
//! All focus-order and arbitration logic elsewhere in the workspace is pure
//! over [`DomPort`], so it can be tested against a simulated document.
//!
//! ## Integration
//!
//! Hosts with their own node identifier type convert at the boundary:
//! ```ignore
//! // In your integration layer:
//! impl From<my_dom::Id> for NodeId {
//!     fn from(id: my_dom::Id) -> Self {
//!         NodeId::from_raw(id.0 as u64)
//!     }
//! }
//! ```

mod id;
mod options;
mod port;

pub mod marks;

pub use id::NodeId;
pub use options::FocusOptions;
pub use port::{DomPort, InsertSide};
