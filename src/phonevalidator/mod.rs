mod calling_code_resolver;
pub mod enums;
pub mod errors;
mod helper_constants;
mod input_normalizer;
mod length_policy;
pub mod phone_number_validator;
mod validation_result;
mod validator_regexps;

pub use enums::CallingCodeSource;
pub use errors::{ErrorKind, ValidationError};
pub use length_policy::LengthPolicy;
pub use phone_number_validator::PhoneNumberValidator;
pub use validation_result::ValidationResult;
