use std::path::Path;

use anyhow::Result;

use crate::physic_engine::{config::AnimationSettings, PhysicEngine};

pub trait RendererEngine {
    /// Synchronise la surface de dessin sur la nouvelle taille affichée.
    fn set_window_size(&mut self, width: u32, height: u32);

    /// Taille courante du buffer de pixels.
    fn surface_size(&self) -> (u32, u32);

    /// Efface la surface puis dessine le pool du moteur physique.
    /// Retourne le nombre de particules dessinées.
    fn render_frame<P: PhysicEngine>(&mut self, physic: &P) -> usize;

    /// Reconstruit le sprite (taille ou couleur modifiée).
    fn rebuild_sprite(&mut self, settings: &AnimationSettings) -> Result<()>;

    /// Écrit le contenu courant de la surface en PNG.
    fn save_screenshot(&self, path: &Path) -> Result<()>;

    fn close(&mut self);
}
