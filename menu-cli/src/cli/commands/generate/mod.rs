mod handler;

pub use handler::handle_generate_command;
