#[cfg(debug_assertions)]
use log::debug;
use std::ops::Range;

use crate::error::AnimationError;
use crate::physic_engine::particle::Particle;
use crate::renderer_engine::{sprite::Sprite, surface::DrawSurface};

/// Pool circulaire de particules à capacité fixe.
///
/// # Rôle
/// Toutes les particules sont allouées une fois pour toutes à la construction,
/// puis recyclées en place. Les particules vivantes occupent une *fenêtre
/// active* contiguë modulo la capacité :
///
/// ```text
///  capacity = 8, first_active = 6, len = 4
///  [ A A . . . . A A ]
///        ^first_free ^first_active
/// ```
///
/// L'ordre d'insertion est l'ordre d'âge (durée de vie uniforme) : on retire
/// donc toujours par l'avant de la fenêtre.
///
/// `first_active == first_free` est ambigu (vide ou plein) : le compteur
/// explicite `len` tranche.
#[derive(Debug)]
pub struct ParticlesPool {
    particles: Vec<Particle>,
    first_active: usize,
    first_free: usize,
    len: usize,

    duration: f32,
    damping: f32,
}

impl ParticlesPool {
    /// Crée un pool de `capacity` particules vivant `duration` secondes.
    pub fn new(capacity: usize, duration: f32, damping: f32) -> Result<Self, AnimationError> {
        if capacity == 0 {
            return Err(AnimationError::invalid("capacity", "must be at least 1"));
        }
        if !duration.is_finite() || duration <= 0.0 {
            return Err(AnimationError::invalid(
                "duration",
                format!("must be a positive number of seconds, got {}", duration),
            ));
        }

        #[cfg(debug_assertions)]
        debug!(
            "ParticlesPool initialized with {} particles ({} bytes)",
            capacity,
            capacity * std::mem::size_of::<Particle>()
        );

        Ok(Self {
            particles: vec![Particle::default(); capacity],
            first_active: 0,
            first_free: 0,
            len: 0,
            duration,
            damping,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    /// Nombre de particules actives.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.particles.len()
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Émet une particule dans le slot libre suivant.
    ///
    /// Si le pool est plein, la plus ancienne particule est écrasée et le début
    /// de la fenêtre avance d'un cran. Retourne `true` dans ce cas.
    /// Complexité : **O(1)**.
    pub fn add(&mut self, x: f32, y: f32, dx: f32, dy: f32) -> bool {
        let capacity = self.particles.len();

        self.particles[self.first_free].initialize(x, y, dx, dy, self.damping);
        self.first_free = (self.first_free + 1) % capacity;

        if self.len == capacity {
            self.first_active = (self.first_active + 1) % capacity;
            true
        } else {
            self.len += 1;
            false
        }
    }

    /// Intègre toutes les particules actives puis retire, par l'avant, celles
    /// qui ont atteint `duration`. Retourne le nombre de particules retirées.
    pub fn update(&mut self, dt: f32) -> usize {
        let (head, tail) = self.active_ranges();
        // au plus deux passes linéaires (fenêtre repliée)
        for p in &mut self.particles[head] {
            p.integrate(dt);
        }
        for p in &mut self.particles[tail] {
            p.integrate(dt);
        }

        let capacity = self.particles.len();
        let mut retired = 0;
        while self.len > 0 && self.particles[self.first_active].is_expired(self.duration) {
            self.first_active = (self.first_active + 1) % capacity;
            self.len -= 1;
            retired += 1;
        }
        retired
    }

    /// Dessine les particules actives, de la plus ancienne à la plus récente
    /// (les récentes recouvrent les anciennes).
    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, sprite: &Sprite) -> usize {
        if self.is_empty() {
            return 0;
        }

        let sprite_size = sprite.width() as f32;
        let mut drawn = 0;
        for p in self.iter_active() {
            surface.draw_sprite(
                sprite,
                p.position,
                p.draw_size(sprite_size, self.duration),
                p.opacity(self.duration),
            );
            drawn += 1;
        }
        drawn
    }

    /// Itère sur les particules actives, de la plus ancienne à la plus récente.
    pub fn iter_active(&self) -> impl Iterator<Item = &Particle> + '_ {
        let (head, tail) = self.active_ranges();
        self.particles[head]
            .iter()
            .chain(self.particles[tail].iter())
    }

    /// Vide la fenêtre active sans toucher au stockage.
    pub fn clear(&mut self) {
        self.first_active = self.first_free;
        self.len = 0;
    }

    /// Les deux tronçons linéaires de la fenêtre active (le second est vide
    /// si la fenêtre ne franchit pas la fin du buffer).
    #[inline]
    fn active_ranges(&self) -> (Range<usize>, Range<usize>) {
        let capacity = self.particles.len();
        let end = self.first_active + self.len;
        if end <= capacity {
            (self.first_active..end, 0..0)
        } else {
            (self.first_active..capacity, 0..end - capacity)
        }
    }
}
