use glam::Vec2;

/// Un point 2D du moteur (position, vitesse, accélération).
///
/// On réutilise `glam::Vec2` : `length()` donne la norme, `Rescale::with_length`
/// la remise à l'échelle le long de la même direction.
pub type Point = Vec2;

pub trait Rescale {
    /// Normalise puis multiplie par `length`.
    ///
    /// Un vecteur nul reste nul (pas de NaN).
    fn with_length(self, length: f32) -> Self;
}

impl Rescale for Vec2 {
    #[inline]
    fn with_length(self, length: f32) -> Self {
        self.normalize_or_zero() * length
    }
}

// ------------------------
// UpdateResult
// ------------------------
/// Bilan d'un pas de simulation, utilisé pour les métriques et les logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Particules émises pendant ce pas.
    pub emitted: usize,
    /// Particules actives écrasées faute de place (pool plein).
    pub evicted: usize,
    /// Particules arrivées en fin de vie et retirées de la fenêtre active.
    pub retired: usize,
    /// Particules actives après le pas.
    pub active: usize,
}
