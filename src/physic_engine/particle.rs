use crate::physic_engine::types::Point;

/// Une particule du pool, réinitialisée en place à chaque recyclage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    pub acceleration: Point,
    /// Âge en secondes depuis l'émission.
    pub age: f32,
}

/// Ease-out cubique : croissance rapide puis approche douce de 1.
#[inline]
pub fn ease_out_cubic(u: f32) -> f32 {
    let v = u - 1.0;
    v * v * v + 1.0
}

impl Particle {
    /// (Ré)initialise la particule : l'accélération est la vitesse initiale
    /// pondérée par `damping`.
    #[inline]
    pub fn initialize(&mut self, x: f32, y: f32, dx: f32, dy: f32, damping: f32) {
        self.position = Point::new(x, y);
        self.velocity = Point::new(dx, dy);
        self.acceleration = self.velocity * damping;
        self.age = 0.0;
    }

    /// Pas d'Euler semi-implicite : position avec la vitesse courante,
    /// puis vitesse avec l'accélération.
    #[inline(always)]
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
        self.velocity += self.acceleration * dt;
        self.age += dt;
    }

    #[inline]
    pub fn is_expired(&self, duration: f32) -> bool {
        self.age >= duration
    }

    /// Avancement normalisé dans [0, 1].
    #[inline]
    pub fn progress(&self, duration: f32) -> f32 {
        (self.age / duration).clamp(0.0, 1.0)
    }

    /// Taille d'affichage : `sprite_size · ease(age / duration)`.
    #[inline]
    pub fn draw_size(&self, sprite_size: f32, duration: f32) -> f32 {
        sprite_size * ease_out_cubic(self.progress(duration))
    }

    /// Opacité : fondu linéaire, 1 à l'émission et 0 pile à l'expiration.
    #[inline]
    pub fn opacity(&self, duration: f32) -> f32 {
        1.0 - self.progress(duration)
    }
}
