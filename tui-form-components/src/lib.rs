//! Pre-built form widgets for tui-form
//!
//! Pure ratatui widgets that render from a form engine's state and emit
//! actions through fn-pointer props:
//!
//! - [`TextField`]: labeled single-line input with cursor, optional
//!   masking, and an error line
//! - [`SubmitButton`]: one-line button rendering the submit lifecycle
//!
//! Widgets never touch the engine directly; the host maps emitted actions
//! to `Form::handle_change`/`Form::begin_submit` and renders the updated
//! state back through props.

pub mod component;
pub mod submit_button;
pub mod testing;
pub mod text_field;

pub use component::Component;
pub use submit_button::{SubmitButton, SubmitButtonProps};
pub use text_field::{TextField, TextFieldProps};
