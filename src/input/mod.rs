pub mod command;
pub mod repl;

pub use repl::{run, write_views};
