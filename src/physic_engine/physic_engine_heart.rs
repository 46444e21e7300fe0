use log::{debug, info, warn};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::physic_engine::{
    config::AnimationSettings,
    heart_curve::random_point_on_heart,
    particles_pool::ParticlesPool,
    types::{Point, Rescale, UpdateResult},
    PhysicEngine,
};

/// Nombre de particules à émettre pour un pas `dt` : `floor(rate · dt)`.
///
/// Le reste fractionnaire n'est pas reporté : au-delà de `rate` frames par
/// seconde (ex: `vsync = false`), chaque frame émet 0 particule.
#[inline]
pub fn emission_count(rate: f32, dt: f32) -> usize {
    if !dt.is_finite() || dt <= 0.0 {
        return 0;
    }
    (rate * dt).floor() as usize
}

/// Moteur de l'animation en cœur : émetteur + pool circulaire.
#[derive(Debug)]
pub struct PhysicEngineHeart<R: Rng = ThreadRng> {
    pool: ParticlesPool,
    settings: AnimationSettings,
    /// Centre de la surface, en coordonnées écran.
    center: Point,
    rng: R,
}

impl PhysicEngineHeart<ThreadRng> {
    pub fn new(settings: &AnimationSettings, width: f32, height: f32) -> anyhow::Result<Self> {
        Self::with_rng(settings, width, height, rand::rng())
    }
}

impl<R: Rng> PhysicEngineHeart<R> {
    /// Variante avec une source aléatoire injectée (ex: `StdRng` graine fixe).
    pub fn with_rng(
        settings: &AnimationSettings,
        width: f32,
        height: f32,
        rng: R,
    ) -> anyhow::Result<Self> {
        settings.validate()?;
        let pool = ParticlesPool::new(
            settings.capacity,
            settings.duration,
            settings.damping_coefficient,
        )?;

        info!(
            "💗 Heart engine ready: {} particles, {:.2}s lifetime, {:.0} particles/s",
            settings.capacity,
            settings.duration,
            settings.emission_rate()
        );

        Ok(Self {
            pool,
            settings: settings.clone(),
            center: Point::new(width / 2.0, height / 2.0),
            rng,
        })
    }

    pub fn center(&self) -> Point {
        self.center
    }

    /// Émet `count` particules sur la courbe. Retourne le nombre de
    /// particules actives écrasées.
    ///
    /// Au-delà de `capacity`, seules les `capacity` dernières émissions
    /// survivraient : les autres ne sont pas simulées, le résultat est le même.
    pub fn emit(&mut self, count: usize) -> usize {
        let capacity = self.pool.capacity();
        let evicted = self.pool.len().saturating_add(count).saturating_sub(capacity);

        for _ in 0..count.min(capacity) {
            let pos = random_point_on_heart(&mut self.rng);
            let dir = pos.with_length(self.settings.emission_velocity);
            // repère math (y vers le haut) → repère écran (y vers le bas)
            self.pool.add(
                self.center.x + pos.x,
                self.center.y - pos.y,
                dir.x,
                -dir.y,
            );
        }
        evicted
    }
}

impl<R: Rng> PhysicEngine for PhysicEngineHeart<R> {
    fn set_viewport_size(&mut self, width: f32, height: f32) {
        self.center = Point::new(width / 2.0, height / 2.0);
        debug!("Emission centre moved to ({}, {})", self.center.x, self.center.y);
    }

    fn update(&mut self, dt: f32) -> UpdateResult {
        let emitted = emission_count(self.settings.emission_rate(), dt);
        let evicted = self.emit(emitted);
        if evicted > 0 {
            warn!(
                "⚠️ Particle pool saturated: {} oldest particles evicted (dt = {:.3}s)",
                evicted, dt
            );
        }

        let retired = self.pool.update(dt);

        UpdateResult {
            emitted,
            evicted,
            retired,
            active: self.pool.len(),
        }
    }

    fn particles(&self) -> &ParticlesPool {
        &self.pool
    }

    fn get_config(&self) -> &AnimationSettings {
        &self.settings
    }

    fn reload_config(&mut self, settings: &AnimationSettings) -> anyhow::Result<bool> {
        settings.validate()?;

        let rebuild = settings.capacity != self.settings.capacity
            || settings.duration != self.settings.duration
            || settings.damping_coefficient != self.settings.damping_coefficient;
        if rebuild {
            info!(
                "Rebuilding particle pool: {} -> {} slots",
                self.settings.capacity, settings.capacity
            );
            self.pool = ParticlesPool::new(
                settings.capacity,
                settings.duration,
                settings.damping_coefficient,
            )?;
        }

        self.settings = settings.clone();
        Ok(rebuild)
    }

    fn close(&mut self) {
        debug!("Heart engine closed with {} active particles", self.pool.len());
        self.pool.clear();
    }
}
