pub mod conference;
pub mod config;
pub mod speaker;
pub mod tables;

pub use conference::*;
pub use config::*;
pub use speaker::*;
pub use tables::*;
