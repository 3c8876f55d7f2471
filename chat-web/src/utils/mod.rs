pub mod constants;
pub mod upload;
