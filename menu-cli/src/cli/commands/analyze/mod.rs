mod handler;

pub use handler::handle_analyze_command;
