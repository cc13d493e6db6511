//! tui-form: form state management for Rust TUI apps
//!
//! A `useForm`-style primitive for terminal UIs: declare a field schema,
//! feed edits and submit attempts to the engine, render from the state it
//! returns. All state mutations happen through the engine's reducer, and
//! every handler reports whether a re-render is needed.
//!
//! # Example
//! ```
//! use tui_form::prelude::*;
//!
//! let schema = FormSchema::new()
//!     .field(FieldDef::new("username").required())
//!     .field(FieldDef::new("bio").initial_value("hi"));
//!
//! let mut form = Form::new(schema);
//! form.handle_change(ChangeEvent::new("username", "ada"));
//! assert!(!form.is_disabled());
//! ```

// Re-export everything from core
pub use tui_form_core::*;

/// Prelude for convenient imports
pub mod prelude {
    pub use tui_form_core::{
        ChangeEvent, FieldDef, FieldError, FieldValues, Form, FormAction, FormObserver,
        FormSchema, FormState, LoggingObserver, ObserverList, SubmitError, SubmitEvent,
        SubmitResult, Validator, REQUIRED_MESSAGE,
    };
}
