pub mod glfw_window;
pub mod tools;

pub use self::glfw_window::{CenterWindow, Fullscreen};
pub use self::tools::show_rust_core_dependencies;
