use image::{Pixel, Rgba, RgbaImage};
use std::path::Path;

use crate::physic_engine::types::Point;
use crate::renderer_engine::sprite::Sprite;
use crate::renderer_engine::viewport::ResizableSurface;

/// Surface sur laquelle le pool dessine ses particules.
pub trait DrawSurface {
    /// Dimensions du buffer de pixels.
    fn size(&self) -> (u32, u32);

    /// Efface tout le contenu.
    fn clear(&mut self);

    /// Dessine `sprite` centré sur `center`, mis à l'échelle en un carré de
    /// `size` pixels, avec l'opacité globale `alpha` (composition *source-over*).
    fn draw_sprite(&mut self, sprite: &Sprite, center: Point, size: f32, alpha: f32);
}

/// Buffer RGBA8 (alpha non prémultiplié) rendu entièrement sur CPU.
///
/// Un buffer vierge est transparent ; un buffer de taille nulle rend tous les
/// dessins inopérants.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    image: RgbaImage,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Octets bruts, ligne 0 en haut (prêts pour `glTexImage2D`).
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Vrai si aucun pixel n'est visible.
    pub fn is_blank(&self) -> bool {
        self.image.pixels().all(|p| p.0[3] == 0)
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        if self.width() == 0 || self.height() == 0 {
            anyhow::bail!("cannot save an empty {}x{} framebuffer", self.width(), self.height());
        }
        self.image.save(path.as_ref())?;
        Ok(())
    }

    /// Composition *source-over* (alpha non prémultiplié) de `src`, dont
    /// l'alpha est pondéré par `alpha`.
    #[inline]
    fn blend(&mut self, x: u32, y: u32, src: [u8; 4], alpha: f32) {
        let a = (src[3] as f32 * alpha).round().clamp(0.0, 255.0) as u8;
        if a == 0 {
            return;
        }
        self.image
            .get_pixel_mut(x, y)
            .blend(&Rgba([src[0], src[1], src[2], a]));
    }
}

impl DrawSurface for Framebuffer {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn clear(&mut self) {
        self.image.pixels_mut().for_each(|p| *p = Rgba([0, 0, 0, 0]));
    }

    fn draw_sprite(&mut self, sprite: &Sprite, center: Point, size: f32, alpha: f32) {
        let (width, height) = self.size();
        if width == 0 || height == 0 || !center.is_finite() || !(size > 0.0) || !(alpha > 0.0) {
            return;
        }

        let x0 = center.x - size / 2.0;
        let y0 = center.y - size / 2.0;
        let px_start = x0.floor().max(0.0) as u32;
        let py_start = y0.floor().max(0.0) as u32;
        let px_end = (x0 + size).ceil().clamp(0.0, width as f32) as u32;
        let py_end = (y0 + size).ceil().clamp(0.0, height as f32) as u32;

        // échantillonnage au plus proche dans le sprite
        let scale_x = sprite.width() as f32 / size;
        let scale_y = sprite.height() as f32 / size;
        let alpha = alpha.min(1.0);

        for py in py_start..py_end {
            let sy = ((py as f32 + 0.5 - y0) * scale_y).floor();
            if sy < 0.0 || sy >= sprite.height() as f32 {
                continue;
            }
            for px in px_start..px_end {
                let sx = ((px as f32 + 0.5 - x0) * scale_x).floor();
                if sx < 0.0 || sx >= sprite.width() as f32 {
                    continue;
                }
                let src = sprite.pixel(sx as u32, sy as u32);
                self.blend(px, py, src, alpha);
            }
        }
    }
}

impl ResizableSurface for Framebuffer {
    /// Réalloue un buffer neuf, même à taille identique.
    fn resize(&mut self, width: u32, height: u32) {
        self.image = RgbaImage::new(width, height);
    }
}
