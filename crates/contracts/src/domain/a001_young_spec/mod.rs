pub mod aggregate;
pub mod metadata;
pub mod validation;

pub use aggregate::YoungSpecRecord;
pub use validation::{validate_record, ValidationErrors};
