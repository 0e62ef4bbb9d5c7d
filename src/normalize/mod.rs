pub mod date;
pub mod speaker;
pub mod text;

pub use date::*;
pub use speaker::*;
pub use text::*;
