pub mod actions;
pub mod custom;
pub mod interaction;
pub mod model;
pub mod view;

pub use actions::*;
pub use custom::*;
pub use interaction::*;
pub use model::*;
pub use view::*;
