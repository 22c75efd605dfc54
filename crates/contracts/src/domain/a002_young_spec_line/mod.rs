pub mod aggregate;
pub mod form;

pub use aggregate::{FieldDefinition, LineItem};
pub use form::{build_rows, initial_values, record_input, FormPhase, FormRow};
