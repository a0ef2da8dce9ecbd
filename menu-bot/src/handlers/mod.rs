mod logging;
mod menu;

pub use logging::LoggingHandler;
pub use menu::MenuHandler;
