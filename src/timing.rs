use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Source d'heure murale, en secondes.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Horloge monotone basée sur `Instant`.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Calcule le pas de temps entre deux frames.
///
/// La première frame a un pas nul (pas de rafale d'émission au démarrage).
/// Sans `max_delta`, un long retour d'arrière-plan donne un grand pas tel quel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTimer {
    last_time: Option<f64>,
    max_delta: Option<f32>,
}

impl FrameTimer {
    pub fn new(max_delta: Option<f32>) -> Self {
        Self {
            last_time: None,
            max_delta,
        }
    }

    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = match self.last_time {
            None => 0.0,
            Some(last) => (now - last).max(0.0) as f32,
        };
        self.last_time = Some(now);

        match self.max_delta {
            Some(max) => dt.min(max),
            None => dt,
        }
    }

    /// Oublie la dernière frame : le prochain `tick` renvoie 0.
    pub fn reset(&mut self) {
        self.last_time = None;
    }

    pub fn set_max_delta(&mut self, max_delta: Option<f32>) {
        self.max_delta = max_delta;
    }
}

/// Jeton d'annulation de la boucle de rendu.
///
/// Partagé par clonage ; une fois annulé, toute frame encore planifiée devient
/// inopérante.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
