use log::info;
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use std::time::Instant;

/// Fenêtres glissantes de mesures, par libellé.
#[derive(Debug, Default)]
struct ProfilerInner {
    /// Durées (ms) des blocs profilés.
    timings: BTreeMap<String, VecDeque<f32>>,
    /// Valeurs scalaires (nombre de particules, etc.).
    metrics: BTreeMap<String, VecDeque<f32>>,
    /// Durées totales des frames (ms).
    frame_times: VecDeque<f32>,
    max_samples: usize,
}

fn push_sample(buffer: &mut VecDeque<f32>, value: f32, max_samples: usize) {
    if buffer.len() >= max_samples {
        buffer.pop_front();
    }
    buffer.push_back(value);
}

/// (moyenne, min, max) d'une série non vide.
fn summarize(series: &VecDeque<f32>) -> Option<(f32, f32, f32)> {
    if series.is_empty() {
        return None;
    }
    let avg = series.iter().sum::<f32>() / series.len() as f32;
    let min = series.iter().copied().fold(f32::MAX, f32::min);
    let max = series.iter().copied().fold(f32::MIN, f32::max);
    Some((avg, min, max))
}

/// Profiler de la boucle de rendu (mono-thread, partagé par clonage).
#[derive(Debug, Clone)]
pub struct Profiler {
    inner: Rc<RefCell<ProfilerInner>>,
}

impl Profiler {
    pub fn new(max_samples: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ProfilerInner {
                max_samples: max_samples.max(1),
                ..Default::default()
            })),
        }
    }

    /// Mesure globale d'une frame (RAII)
    pub fn frame(&self) -> FrameGuard {
        FrameGuard {
            profiler: self.clone(),
            start: Instant::now(),
        }
    }

    /// Profile un bloc de code et retourne sa valeur de retour
    pub fn profile_block<T, F>(&self, label: &str, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let result = f();
        let dt = start.elapsed().as_secs_f32() * 1000.0;

        let mut inner = self.inner.borrow_mut();
        let max_samples = inner.max_samples;
        let buffer = inner.timings.entry(label.to_string()).or_default();
        push_sample(buffer, dt, max_samples);
        result
    }

    /// Enregistre une métrique scalaire
    pub fn record_metric(&self, label: &str, value: impl Into<f64>) {
        let mut inner = self.inner.borrow_mut();
        let max_samples = inner.max_samples;
        let buffer = inner.metrics.entry(label.to_string()).or_default();
        push_sample(buffer, value.into() as f32, max_samples);
    }

    /// FPS moyen sur la fenêtre glissante
    pub fn fps(&self) -> f32 {
        let inner = self.inner.borrow();
        match summarize(&inner.frame_times) {
            Some((avg, _, _)) if avg > 0.0 => 1000.0 / avg,
            _ => 0.0,
        }
    }

    pub fn total_frames(&self) -> usize {
        self.inner.borrow().frame_times.len()
    }

    pub fn timing_summary(&self, label: &str) -> Option<(f32, f32, f32)> {
        self.inner.borrow().timings.get(label).and_then(summarize)
    }

    pub fn metric_summary(&self, label: &str) -> Option<(f32, f32, f32)> {
        self.inner.borrow().metrics.get(label).and_then(summarize)
    }

    /// Log toutes les métriques vers l'info log avec un target spécifique
    pub fn log_metrics_for_target(&self, target: &str, show_fps: bool) {
        if show_fps {
            info!(target: target, "{:.2} FPS", self.fps());
        }
        let inner = self.inner.borrow();
        for (label, series) in &inner.timings {
            if let Some((avg, min, max)) = summarize(series) {
                info!(
                    target: target,
                    "{}: avg = {:.3} ms | min = {:.3} ms | max = {:.3} ms",
                    label, avg, min, max
                );
            }
        }
        for (label, series) in &inner.metrics {
            if let Some((avg, min, max)) = summarize(series) {
                info!(target: target, "{label}: avg={avg:.1}, min={min:.0}, max={max:.0}");
            }
        }
    }
}

/// Mesure globale d'une frame
pub struct FrameGuard {
    profiler: Profiler,
    start: Instant,
}

impl Drop for FrameGuard {
    fn drop(&mut self) {
        let dt = self.start.elapsed().as_secs_f32() * 1000.0;
        let mut inner = self.profiler.inner.borrow_mut();
        let max_samples = inner.max_samples;
        push_sample(&mut inner.frame_times, dt, max_samples);
    }
}

/// Macro helper : déduit automatiquement le target via le module appelant
#[macro_export]
macro_rules! log_metrics_and_fps {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!(), true);
    };
}
