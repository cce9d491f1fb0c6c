pub mod block;
pub mod event;
pub mod parameter;
pub mod port;

pub use block::*;
pub use event::*;
pub use parameter::*;
pub use port::*;
