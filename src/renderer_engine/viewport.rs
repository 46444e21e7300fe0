use log::{debug, warn};

use crate::physic_engine::types::Point;

/// Surface dont le buffer de pixels peut être redimensionné.
pub trait ResizableSurface {
    /// Remplace le buffer par un buffer neuf de `width × height` pixels.
    fn resize(&mut self, width: u32, height: u32);
}

/// Garde le buffer de la surface aligné sur sa taille affichée.
///
/// Appelé au montage puis à chaque événement de redimensionnement. Ne connaît
/// pas le pool de particules.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    resizes: u64,
}

impl Viewport {
    pub fn sync<S: ResizableSurface + ?Sized>(&mut self, surface: &mut S, width: u32, height: u32) {
        if width == 0 || height == 0 {
            warn!(
                "🖥️ Degenerate viewport {} x {}: drawing disabled until next resize",
                width, height
            );
        } else {
            debug!("🖥️ Viewport resized: {} x {}", width, height);
        }

        surface.resize(width, height);
        self.width = width;
        self.height = height;
        self.resizes += 1;
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Centre de la surface (origine de l'émission).
    pub fn center(&self) -> Point {
        Point::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Nombre de synchronisations depuis le montage (montage inclus).
    pub fn resize_count(&self) -> u64 {
        self.resizes
    }

    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
