pub mod client;
pub mod preview;
pub mod template;
pub mod transport;

pub use client::*;
pub use preview::*;
pub use template::*;
pub use transport::*;
