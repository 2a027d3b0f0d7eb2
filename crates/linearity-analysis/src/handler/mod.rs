//! Input sanitation: heterogeneous external matrices to clean numeric ones.

pub mod matrix;
pub mod value;

pub use matrix::DataHandler;
pub use value::normalize;
