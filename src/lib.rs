pub mod simulator;
pub use simulator::Simulator;
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::RendererEngine;
// Physic engine
pub mod physic_engine;
pub use physic_engine::{AnimationSettings, PhysicEngine, PhysicEngineHeart};
// Window engine
pub mod window_engine;
pub use window_engine::{WindowEngine, WindowEvent};

pub mod error;
pub use error::AnimationError;
pub mod timing;
pub use timing::{CancellationToken, Clock, FrameTimer, SystemClock};

// Profiler
pub mod profiler;
// Utilities
pub mod utils;
