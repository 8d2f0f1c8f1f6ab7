mod category;
mod task;
mod timer;

pub use category::CategoryCommands;
pub use task::TaskCommands;
pub use timer::TimerCommands;
