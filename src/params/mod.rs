pub mod form;
pub mod snapshot;
pub mod value;

pub use form::*;
pub use snapshot::*;
pub use value::*;
