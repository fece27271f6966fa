pub mod banner;
pub mod popup;

pub use banner::*;
pub use popup::*;
