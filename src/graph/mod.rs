pub mod change;
pub mod controller;
pub mod edge;
pub mod layout;
pub mod state;

pub use change::*;
pub use controller::*;
pub use edge::*;
pub use layout::*;
pub use state::*;
