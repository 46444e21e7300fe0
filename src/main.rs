// Ici on importe depuis la crate lib complète
use anyhow::Result;
use log::{info, warn};
use std::env;

use heart_particles::physic_engine::{AnimationSettings, PhysicEngineHeart};
use heart_particles::renderer_engine::{Renderer, RendererConfig};
use heart_particles::simulator::DEFAULT_SETTINGS_PATH;
use heart_particles::utils::show_rust_core_dependencies;
use heart_particles::window_engine::{GlfwWindowEngine, WindowEngine};
use heart_particles::Simulator;

const RENDERER_CONFIG_PATH: &str = "assets/config/renderer.toml";

/// Main entry point for the heart particles animation.
fn main() -> Result<()> {
    env_logger::init();

    info!("💗 Starting Heart Particles...");

    show_rust_core_dependencies();

    // priorité à l'argument CLI, puis à la variable d'environnement
    let settings_path = env::args()
        .nth(1)
        .or_else(|| env::var("HEART_PARTICLES_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());

    let settings = match AnimationSettings::from_file(&settings_path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("⚠️ Using default settings ({settings_path}: {e:#})");
            AnimationSettings::default()
        }
    };
    info!("Animation settings loaded:\n{:#?}", settings);

    let renderer_config = RendererConfig::from_file(RENDERER_CONFIG_PATH).unwrap_or_default();

    // 1. Init Window & Context
    let window_engine = GlfwWindowEngine::init(1024, 800, "Heart Particles")?;
    let (width, height) = window_engine.framebuffer_size();

    // 2. Init Renderer (now that GL context is ready)
    let renderer_engine = Renderer::new(width, height, &settings, &renderer_config)?;

    let physic_engine = PhysicEngineHeart::new(&settings, width as f32, height as f32)?;

    // 3. Init Simulator
    let mut simulator = Simulator::new(renderer_engine, physic_engine, window_engine);
    simulator.apply_renderer_config(&renderer_config);
    simulator.set_settings_path(&settings_path);

    let result = simulator.run();
    simulator.close();

    result
}
