//! Error handling for datatier.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod classify_error;
pub mod column_error;
pub mod config_error;
pub mod detection_error;
pub mod error_code;
pub mod input_error;

pub use classify_error::ClassifyError;
pub use column_error::ColumnError;
pub use config_error::ConfigError;
pub use detection_error::DetectionError;
pub use error_code::ErrorCode;
pub use input_error::InputError;
