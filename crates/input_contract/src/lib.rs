//! UI-agnostic contract for validated text inputs.
//!
//! The widget layer owns one [`FieldState`] per rendered field and routes raw DOM events
//! through it:
//!
//! - [`normalize`] canonicalizes Persian digits and strips characters the field kind does
//!   not accept, before the value is committed;
//! - a caller-supplied [`Validator`] decides validity, which is surfaced as display state
//!   ([`FieldStatus`]) rather than rejecting input;
//! - [`FieldConfig`] is the immutable per-instance configuration snapshot.
//!
//! Nothing here depends on Leptos, so the whole state machine is testable natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod config;
mod normalize;
mod state;
mod validator;

pub use config::{FieldConfig, InputKind, DEFAULT_INVALID_MESSAGE};
pub use normalize::{normalize, NormalizeMode};
pub use state::{FieldState, FieldStatus};
pub use validator::{validate, Validator};
