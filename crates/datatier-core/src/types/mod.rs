//! Classification taxonomy shared by config and analysis.

pub mod data_type;
pub mod sensitivity;

pub use data_type::DataType;
pub use sensitivity::Sensitivity;
