pub mod commands;
pub mod controller;
pub mod history;
pub mod ports;
pub mod snapshot;
pub mod task;
pub mod task_list;

pub use commands::Command;
pub use controller::{HistoryController, HistoryState, Outcome};
pub use history::{HistoryBoundary, HistoryMark, SnapshotStore};
pub use ports::{Confirm, FixedAnswer, PersistenceGateway, PresentationPort};
pub use snapshot::Snapshot;
pub use task::Task;
pub use task_list::TaskList;
