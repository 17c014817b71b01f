mod handler;

pub use handler::{UPDATES_FILE, handle_execute_command};
