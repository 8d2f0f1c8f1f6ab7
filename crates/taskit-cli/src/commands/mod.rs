pub mod category;
pub mod dispatch;
pub mod shared;
pub mod stats;
pub mod task;
pub mod timer;
