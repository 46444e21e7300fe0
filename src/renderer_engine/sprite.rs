use image::{Rgba, RgbaImage};
use itertools::Itertools;
use log::debug;
use std::f32::consts::PI;
use std::path::Path;

use crate::error::AnimationError;
use crate::physic_engine::{heart_curve::point_on_heart, types::Point};

/// Pas angulaire du tracé du contour (radians).
pub const OUTLINE_STEP: f32 = 0.01;
/// Étendue de la courbe ramenée à la taille du sprite (unités courbe).
const CURVE_EXTENT: f32 = 350.0;
/// Sous-échantillons par axe pour l'anti-aliasing du remplissage.
const SUPERSAMPLING: usize = 4;

/// Tampon (stamp) en cœur partagé par toutes les particules.
///
/// Construit une seule fois par animation, puis uniquement lu.
#[derive(Debug, Clone)]
pub struct Sprite {
    image: RgbaImage,
}

impl Sprite {
    /// Rasterise la courbe en cœur dans une image `size × size` remplie de `color`.
    ///
    /// Échoue (`SpriteUnavailable`) si `size` est nul ou si aucun pixel n'est
    /// couvert : l'animation ne doit alors pas démarrer.
    pub fn build(size: u32, color: [u8; 4]) -> Result<Self, AnimationError> {
        if size == 0 {
            return Err(AnimationError::SpriteUnavailable { size });
        }

        let outline = Self::outline(size);
        let coverage = rasterize_coverage(&outline, size as usize);
        let samples = (SUPERSAMPLING * SUPERSAMPLING) as f32;

        if coverage.iter().all(|&c| c == 0) {
            return Err(AnimationError::SpriteUnavailable { size });
        }

        let image = RgbaImage::from_fn(size, size, |x, y| {
            let c = coverage[(y * size + x) as usize] as f32 / samples;
            let alpha = (color[3] as f32 * c).round() as u8;
            Rgba([color[0], color[1], color[2], alpha])
        });

        debug!(
            "Heart sprite rasterized: {}x{} px, {} outline points",
            size,
            size,
            outline.len()
        );

        Ok(Self { image })
    }

    /// Contour du cœur en coordonnées raster (y vers le bas), de −π à π.
    pub fn outline(size: u32) -> Vec<Point> {
        let half = size as f32 / 2.0;
        let scale = size as f32 / CURVE_EXTENT;
        let to_raster = |t: f32| {
            let p = point_on_heart(t);
            Point::new(half + p.x * scale, half - p.y * scale)
        };

        let steps = (2.0 * PI / OUTLINE_STEP).ceil() as usize + 1;
        let mut points = Vec::with_capacity(steps + 1);
        let mut t = -PI;
        points.push(to_raster(t));
        while t < PI {
            t += OUTLINE_STEP;
            points.push(to_raster(t));
        }
        points
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

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        self.image.save(path.as_ref())?;
        Ok(())
    }
}

/// Couverture (en sous-échantillons) de chaque pixel par le polygone fermé,
/// règle pair-impair, balayage par lignes de sous-échantillons.
fn rasterize_coverage(outline: &[Point], size: usize) -> Vec<u32> {
    let ss = SUPERSAMPLING;
    let columns = size * ss;
    let mut coverage = vec![0u32; size * size];
    let mut crossings: Vec<f32> = Vec::with_capacity(16);

    for sy in 0..size * ss {
        let yc = (sy as f32 + 0.5) / ss as f32;

        crossings.clear();
        // circular_tuple_windows ferme le chemin (dernier → premier point)
        for (a, b) in outline.iter().circular_tuple_windows() {
            if (a.y <= yc) != (b.y <= yc) {
                let t = (yc - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        let row = (sy / ss) * size;
        for span in crossings.chunks_exact(2) {
            // colonnes dont le centre est dans [x0, x1)
            let start = (span[0] * ss as f32 - 0.5).ceil().max(0.0) as usize;
            let end = ((span[1] * ss as f32 - 0.5).ceil().max(0.0) as usize).min(columns);
            for sx in start..end {
                coverage[row + sx / ss] += 1;
            }
        }
    }
    coverage
}
