pub mod gateway;
pub mod serialization;
pub mod store;
pub mod traits;

pub use gateway::TaskListGateway;
pub use serialization::*;
pub use store::*;
pub use traits::*;
