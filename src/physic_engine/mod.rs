pub mod r#trait;
pub use r#trait::PhysicEngine;

pub mod types;
pub use self::types::{Point, Rescale, UpdateResult};

pub mod heart_curve;
pub use self::heart_curve::{point_on_heart, random_point_on_heart};

pub mod particle;
pub use self::particle::Particle;

pub mod particles_pool;
pub use self::particles_pool::ParticlesPool;

pub mod config;
pub use self::config::AnimationSettings;

pub mod physic_engine_heart;
pub use self::physic_engine_heart::PhysicEngineHeart;
