pub mod r#trait;
pub use r#trait::RendererEngine;

pub mod config;
pub use self::config::RendererConfig;

pub mod sprite;
pub use self::sprite::Sprite;
pub mod surface;
pub use self::surface::{DrawSurface, Framebuffer};
pub mod viewport;
pub use self::viewport::{ResizableSurface, Viewport};

pub mod software_renderer;
pub use self::software_renderer::SoftwareRenderer;
pub mod renderer;
pub use self::renderer::Renderer;

pub mod shader;
pub mod tools;
pub use self::tools::show_opengl_context_info;

pub mod types;
pub use self::types::QuadVertex;
