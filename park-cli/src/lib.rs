pub mod console;
pub mod state;

pub use console::Console;
pub use state::build_system;
