pub mod config;
pub mod error;
pub mod notice;
pub mod result;

pub use config::AppConfig;
pub use error::TodoError;
pub use notice::Notice;
pub use result::TodoResult;
