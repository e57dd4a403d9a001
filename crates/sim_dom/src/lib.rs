//! # sim_dom
//!
//! Arena-backed simulated document implementing [`dom_core::DomPort`].
//!
//! The engine's scanner and arbiter are pure over the port, so everything
//! above this crate can be exercised against a [`SimDom`] instead of a real
//! browser document. The simulation plays the platform's role faithfully
//! enough for containment semantics: it tracks a single active element,
//! refuses to focus hidden or non-focusable elements, and drops focus when
//! the focused subtree is removed.
//!
//! Trees are built imperatively:
//!
//! ```ignore
//! let mut dom = SimDom::new();
//! let body = dom.body();
//! let input = dom.el(body, "input", &[]);
//! let button = dom.el(body, "button", &[]);
//! ```

mod dom;
mod error;

pub use dom::SimDom;
pub use error::SimDomError;
