use anyhow::Result;
use log::{debug, info};
use std::path::Path;

use crate::error::AnimationError;
use crate::physic_engine::{config::AnimationSettings, PhysicEngine};
use crate::renderer_engine::{
    sprite::Sprite,
    surface::{DrawSurface, Framebuffer},
    viewport::Viewport,
    RendererEngine,
};

/// Renderer CPU : compose les particules dans un `Framebuffer`.
///
/// Utilisable sans fenêtre ni contexte OpenGL (tests, captures) ; le
/// `Renderer` OpenGL s'appuie dessus et se contente de présenter le buffer.
#[derive(Debug)]
pub struct SoftwareRenderer {
    framebuffer: Framebuffer,
    sprite: Sprite,
    viewport: Viewport,
    frames: u64,
}

impl SoftwareRenderer {
    /// Construit le sprite puis monte la surface à `width × height`.
    ///
    /// Une surface de taille nulle ou un sprite impossible à rasteriser sont
    /// des échecs d'initialisation.
    pub fn new(width: u32, height: u32, settings: &AnimationSettings) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(AnimationError::SurfaceUnavailable { width, height }.into());
        }

        let sprite = Sprite::build(settings.sprite_size, settings.sprite_color)?;

        let mut framebuffer = Framebuffer::new(0, 0);
        let mut viewport = Viewport::default();
        viewport.sync(&mut framebuffer, width, height);

        info!(
            "🎨 Software surface ready: {} x {} ({} bytes), sprite {} px",
            width,
            height,
            framebuffer.as_raw().len(),
            sprite.width()
        );

        Ok(Self {
            framebuffer,
            sprite,
            viewport,
            frames: 0,
        })
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RendererEngine for SoftwareRenderer {
    fn set_window_size(&mut self, width: u32, height: u32) {
        self.viewport.sync(&mut self.framebuffer, width, height);
    }

    fn surface_size(&self) -> (u32, u32) {
        self.framebuffer.size()
    }

    fn render_frame<P: PhysicEngine>(&mut self, physic: &P) -> usize {
        self.frames += 1;
        self.framebuffer.clear();
        physic.particles().draw(&mut self.framebuffer, &self.sprite)
    }

    fn rebuild_sprite(&mut self, settings: &AnimationSettings) -> Result<()> {
        let sprite = Sprite::build(settings.sprite_size, settings.sprite_color)?;
        debug!("Sprite rebuilt at {} px", sprite.width());
        self.sprite = sprite;
        Ok(())
    }

    fn save_screenshot(&self, path: &Path) -> Result<()> {
        self.framebuffer.save_png(path)?;
        info!("📸 Screenshot saved to {}", path.display());
        Ok(())
    }

    fn close(&mut self) {
        debug!("Software renderer closed after {} frames", self.frames);
    }
}
