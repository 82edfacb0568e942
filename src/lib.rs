pub mod console;
pub mod logging;
pub mod model;
pub mod prefix;
pub mod remote;
pub mod transcript;
pub mod tui;

mod tui_shell;
