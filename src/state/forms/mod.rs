//! Form domain layer
//!
//! Type-safe form handling for the signup screen.

mod field;
mod form_state;

pub use field::FormField;
pub use form_state::{Form, SignupForm};
