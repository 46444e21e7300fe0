use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::AnimationError;

pub const DEFAULT_CAPACITY: usize = 2000;
pub const DEFAULT_DURATION: f32 = 2.0;
pub const DEFAULT_EMISSION_VELOCITY: f32 = 100.0;
pub const DEFAULT_DAMPING_COEFFICIENT: f32 = -0.75;
pub const DEFAULT_SPRITE_SIZE: u32 = 30;
/// Rose doux `#ea80b0`, opaque.
pub const DEFAULT_SPRITE_COLOR: [u8; 4] = [0xea, 0x80, 0xb0, 0xff];

/// Réglages de l'animation en cœur.
///
/// Chargés depuis un fichier TOML (`from_file`) ou construits par le builder :
///
/// ```
/// use heart_particles::physic_engine::config::AnimationSettingsBuilder;
///
/// let settings = AnimationSettingsBuilder::default()
///     .capacity(4)
///     .duration(1.0)
///     .build()
///     .unwrap();
/// assert_eq!(settings.capacity, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Deserialize, Serialize)]
#[builder(pattern = "owned", build_fn(error = "anyhow::Error"))]
#[serde(default)]
pub struct AnimationSettings {
    /// Nombre de slots du pool (particules vivantes au plus).
    #[builder(default = "DEFAULT_CAPACITY")]
    pub capacity: usize,

    /// Durée de vie d'une particule, en secondes.
    #[builder(default = "DEFAULT_DURATION")]
    pub duration: f32,

    /// Norme de la vitesse initiale (px/s).
    #[builder(default = "DEFAULT_EMISSION_VELOCITY")]
    pub emission_velocity: f32,

    /// Fraction de la vitesse initiale appliquée comme accélération constante
    /// (négatif = freinage).
    #[builder(default = "DEFAULT_DAMPING_COEFFICIENT")]
    pub damping_coefficient: f32,

    /// Taille native du sprite, en pixels.
    #[builder(default = "DEFAULT_SPRITE_SIZE")]
    pub sprite_size: u32,

    /// Couleur de remplissage du sprite (RGBA).
    #[builder(default = "DEFAULT_SPRITE_COLOR")]
    pub sprite_color: [u8; 4],

    /// Borne optionnelle du pas de temps (s). `None` : aucun écrêtage, un
    /// long retour d'arrière-plan produit une rafale d'émission.
    #[builder(default, setter(strip_option))]
    pub max_delta_time: Option<f32>,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            duration: DEFAULT_DURATION,
            emission_velocity: DEFAULT_EMISSION_VELOCITY,
            damping_coefficient: DEFAULT_DAMPING_COEFFICIENT,
            sprite_size: DEFAULT_SPRITE_SIZE,
            sprite_color: DEFAULT_SPRITE_COLOR,
            max_delta_time: None,
        }
    }
}

impl AnimationSettings {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&text)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Particules émises par seconde : en régime permanent, `capacity`
    /// particules sont vivantes en moyenne.
    pub fn emission_rate(&self) -> f32 {
        self.capacity as f32 / self.duration
    }

    pub fn validate(&self) -> Result<(), AnimationError> {
        if self.capacity == 0 {
            return Err(AnimationError::invalid("capacity", "must be at least 1"));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(AnimationError::invalid(
                "duration",
                format!("must be a positive number of seconds, got {}", self.duration),
            ));
        }
        if !self.emission_velocity.is_finite() || !self.damping_coefficient.is_finite() {
            return Err(AnimationError::invalid(
                "emission_velocity",
                "velocity and damping must be finite",
            ));
        }
        if self.sprite_size == 0 {
            return Err(AnimationError::invalid("sprite_size", "must be at least 1px"));
        }
        if let Some(max_dt) = self.max_delta_time {
            if !(max_dt > 0.0) {
                return Err(AnimationError::invalid(
                    "max_delta_time",
                    format!("must be positive when set, got {}", max_dt),
                ));
            }
        }
        Ok(())
    }
}
