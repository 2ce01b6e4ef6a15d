pub mod common;
pub mod form;
pub mod form_field;
pub mod text_input;

pub use form::{Form, FormAction};
pub use form_field::FormField;
pub use text_input::TextInput;
