pub mod formatter;

pub use formatter::{render_summary, render_task_groups};
