pub mod extractor;
pub mod test_utils;
pub mod validation;

pub use extractor::{AppJson, AppPath, AppQuery};
pub use validation::{normalize_optional, validate_form, FieldRules, FormSchema};
