pub mod endpoint;
pub mod providers;
