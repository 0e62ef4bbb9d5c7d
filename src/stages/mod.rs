pub mod lengths;
pub mod report;
pub mod sentiment;
pub mod speakers;
pub mod states;
pub mod topics;
pub mod turns;

pub use lengths::*;
pub use report::*;
pub use sentiment::*;
pub use speakers::*;
pub use states::*;
pub use topics::*;
pub use turns::*;
