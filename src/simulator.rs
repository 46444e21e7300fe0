use crate::physic_engine::{AnimationSettings, PhysicEngine, UpdateResult};
use crate::renderer_engine::{RendererConfig, RendererEngine};
use crate::timing::{CancellationToken, Clock, FrameTimer, SystemClock};
use crate::window_engine::{WindowEngine, WindowEvent};
use crate::{log_metrics_and_fps, profiler::Profiler};
use anyhow::Result;
use log::{debug, info, warn};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Chemin par défaut des réglages de l'animation.
pub const DEFAULT_SETTINGS_PATH: &str = "assets/config/heart.toml";

const LOG_INTERVAL: Duration = Duration::from_secs(5);

/// Boucle de rendu : une frame = événements, pas de temps, simulation, dessin, présentation.
pub struct Simulator<R, P, W, C = SystemClock>
where
    R: RendererEngine,
    P: PhysicEngine,
    W: WindowEngine,
    C: Clock,
{
    renderer_engine: R,
    physic_engine: P,
    window_engine: W,
    clock: C,

    frame_timer: FrameTimer,
    /// Présent tant que la boucle tourne.
    token: Option<CancellationToken>,

    frames: u64,
    last_update: UpdateResult,

    vsync: bool,
    settings_path: PathBuf,
    screenshot_dir: PathBuf,

    // Loop state
    profiler: Profiler,
    last_log: Instant,
}

impl<R, P, W> Simulator<R, P, W, SystemClock>
where
    R: RendererEngine,
    P: PhysicEngine,
    W: WindowEngine,
{
    pub fn new(renderer_engine: R, physic_engine: P, window_engine: W) -> Self {
        Self::with_clock(
            renderer_engine,
            physic_engine,
            window_engine,
            SystemClock::default(),
        )
    }
}

impl<R, P, W, C> Simulator<R, P, W, C>
where
    R: RendererEngine,
    P: PhysicEngine,
    W: WindowEngine,
    C: Clock,
{
    pub fn with_clock(renderer_engine: R, physic_engine: P, window_engine: W, clock: C) -> Self {
        let renderer_config = RendererConfig::default();
        let frame_timer = FrameTimer::new(physic_engine.get_config().max_delta_time);

        Self {
            renderer_engine,
            physic_engine,
            window_engine,
            clock,
            frame_timer,
            token: None,
            frames: 0,
            last_update: UpdateResult::default(),
            vsync: renderer_config.vsync,
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            screenshot_dir: PathBuf::from(renderer_config.screenshot_dir),
            profiler: Profiler::new(200),
            last_log: Instant::now(),
        }
    }

    /// Fichier relu sur `WindowEvent::ReloadConfig`.
    pub fn set_settings_path(&mut self, path: impl Into<PathBuf>) {
        self.settings_path = path.into();
    }

    pub fn apply_renderer_config(&mut self, config: &RendererConfig) {
        self.vsync = config.vsync;
        self.screenshot_dir = PathBuf::from(&config.screenshot_dir);
    }

    /// Monte l'animation : planification des frames, écoute des
    /// redimensionnements et dimensionnement initial de la surface.
    ///
    /// Si la planification est refusée, rien n'est monté et l'erreur remonte.
    pub fn start(&mut self) -> Result<CancellationToken> {
        if let Some(token) = &self.token {
            debug!("Simulator already started");
            return Ok(token.clone());
        }

        self.window_engine.start_frame_scheduling(self.vsync)?;
        self.window_engine.set_resize_listener(true);

        let (width, height) = self.window_engine.framebuffer_size();
        self.apply_resize(width, height);

        self.frame_timer.reset();
        self.last_log = Instant::now();

        let token = CancellationToken::new();
        self.token = Some(token.clone());

        info!("🚀 Heart animation started ({} x {})", width, height);
        Ok(token)
    }

    /// Démonte l'animation. Sans effet si elle n'est pas démarrée.
    pub fn stop(&mut self) {
        if let Some(token) = self.token.take() {
            token.cancel();
            self.window_engine.set_resize_listener(false);
            self.window_engine.stop_frame_scheduling();
            info!("🛑 Heart animation stopped after {} frames", self.frames);
        }
    }

    pub fn is_running(&self) -> bool {
        self.token.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// Démarre puis enchaîne les frames jusqu'à la fermeture de la fenêtre.
    pub fn run(&mut self) -> Result<()> {
        self.start()?;
        while self.step() {}
        self.stop();
        Ok(())
    }

    /// Exécute une frame. Retourne `false` (sans rien dessiner) si la boucle
    /// est arrêtée, annulée ou si la fenêtre doit se fermer.
    pub fn step(&mut self) -> bool {
        if !self.is_running() || self.window_engine.should_close() {
            return false;
        }

        for event in self.window_engine.poll_events() {
            self.handle_event(event);
        }
        if self.window_engine.should_close() {
            return false;
        }

        // 🔹 start global frame
        let _frame_guard = self.profiler.frame(); // RAII: mesure totale de la frame

        let dt = self.frame_timer.tick(self.clock.now());

        let update_result = self
            .profiler
            .profile_block("physic - update", || self.physic_engine.update(dt));
        self.profiler
            .record_metric("active particles", update_result.active as u32);
        self.last_update = update_result;

        self.profiler.profile_block("render frame", || {
            self.profiler.record_metric(
                "total particles drawn",
                self.renderer_engine.render_frame(&self.physic_engine) as u32,
            );
        });

        self.window_engine.present();
        self.frames += 1;

        if self.frames == 1 {
            info!("🚀 First frame rendered");
        }
        if self.last_log.elapsed() >= LOG_INTERVAL {
            log_metrics_and_fps!(&self.profiler);
            self.last_log = Instant::now();
        }

        true
    }

    fn handle_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::Resized { width, height } => self.apply_resize(width, height),
            WindowEvent::CloseRequested => self.window_engine.set_should_close(true),
            WindowEvent::ReloadConfig => self.reload_config(),
            WindowEvent::Screenshot => {
                if let Err(e) = self.save_screenshot() {
                    warn!("❌ Screenshot failed: {e:#}");
                }
            }
            WindowEvent::ToggleFullscreen => self.window_engine.toggle_fullscreen(),
        }
    }

    /// Resynchronise la surface et le centre d'émission ; le pool est conservé.
    fn apply_resize(&mut self, width: u32, height: u32) {
        self.renderer_engine.set_window_size(width, height);
        let (surface_width, surface_height) = self.renderer_engine.surface_size();
        self.physic_engine
            .set_viewport_size(surface_width as f32, surface_height as f32);
        info!("🖥️ Window resized: {} x {}", width, height);
    }

    /// Relit le fichier de réglages. Un fichier invalide est ignoré : la
    /// frame suivante tourne avec les réglages courants.
    pub fn reload_config(&mut self) {
        let path = self.settings_path.to_string_lossy().into_owned();
        let settings = match AnimationSettings::from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("❌ Settings reload from {path} failed: {e:#}");
                return;
            }
        };
        info!("Animation settings loaded:\n{:#?}", settings);

        if let Err(e) = self.apply_settings(&settings) {
            warn!("❌ Settings rejected: {e:#}");
        }
    }

    /// Applique des réglages au moteur physique, au sprite et au pas de temps.
    ///
    /// Les réglages sont validés avant toute modification : un refus laisse
    /// sprite, pool et pas de temps intacts.
    pub fn apply_settings(&mut self, settings: &AnimationSettings) -> Result<()> {
        settings.validate()?;
        let previous = self.physic_engine.get_config().clone();

        if previous.sprite_size != settings.sprite_size
            || previous.sprite_color != settings.sprite_color
        {
            self.renderer_engine.rebuild_sprite(settings)?;
        }
        if self.physic_engine.reload_config(settings)? {
            info!("🔄 Particle pool rebuilt ({} slots)", settings.capacity);
        }
        self.frame_timer.set_max_delta(settings.max_delta_time);
        Ok(())
    }

    /// Capture PNG de la surface, nommée d'après le numéro de frame.
    pub fn save_screenshot(&mut self) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.screenshot_dir)?;
        let path = self
            .screenshot_dir
            .join(format!("heart_{:06}.png", self.frames));
        self.renderer_engine.save_screenshot(&path)?;
        Ok(path)
    }

    pub fn close(&mut self) {
        self.stop();
        self.renderer_engine.close();
        self.physic_engine.close();
        // Window engine cleanup happens automatically when dropped
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_update(&self) -> UpdateResult {
        self.last_update
    }

    pub fn token(&self) -> Option<&CancellationToken> {
        self.token.as_ref()
    }

    pub fn profiler(&self) -> &Profiler {
        &self.profiler
    }

    pub fn renderer_engine(&self) -> &R {
        &self.renderer_engine
    }

    pub fn physic_engine(&self) -> &P {
        &self.physic_engine
    }

    pub fn window_engine(&self) -> &W {
        &self.window_engine
    }

    pub fn window_engine_mut(&mut self) -> &mut W {
        &mut self.window_engine
    }
}
