pub mod session_ops;
pub mod task_ops;
