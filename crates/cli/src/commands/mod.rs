pub mod configure;
pub mod init;
pub mod project;
pub mod tasks;
pub mod version;

pub use configure::configure_command;
pub use init::init_command;
pub use project::{configure_project, load_project};
pub use tasks::tasks_command;
pub use version::version_command;
