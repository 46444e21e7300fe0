use crate::physic_engine::config::AnimationSettings;
use crate::physic_engine::particles_pool::ParticlesPool;
use crate::physic_engine::types::UpdateResult;

/// 🔧 Trait `PhysicEngine`
///
/// Interface commune des moteurs de particules pilotés par le `Simulator`.
/// Le moteur possède son pool en exclusivité ; le renderer n'y accède qu'en
/// lecture via `particles()`.
pub trait PhysicEngine {
    /// Taille de la surface de dessin : l'émission est centrée dessus.
    /// Ne touche pas au pool.
    fn set_viewport_size(&mut self, width: f32, height: f32);

    /// Avance la simulation de `dt` secondes (émission, intégration, retrait).
    fn update(&mut self, dt: f32) -> UpdateResult;

    /// Pool en lecture seule, pour le rendu.
    fn particles(&self) -> &ParticlesPool;

    fn get_config(&self) -> &AnimationSettings;

    /// Applique de nouveaux réglages. Retourne `true` si le pool a été recréé.
    fn reload_config(&mut self, settings: &AnimationSettings) -> anyhow::Result<bool>;

    /// Ferme / libère le moteur physique.
    fn close(&mut self) {} // Par défaut, fait rien.
}
