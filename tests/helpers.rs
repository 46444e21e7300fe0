#![allow(dead_code)]

use heart_particles::physic_engine::types::Point;
use heart_particles::physic_engine::{AnimationSettings, PhysicEngine};
use heart_particles::renderer_engine::{DrawSurface, RendererEngine, Sprite};
use heart_particles::timing::Clock;
use heart_particles::window_engine::{WindowEngine, WindowEvent};
use heart_particles::AnimationError;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::Path;
use std::rc::Rc;

/// Horloge pilotée à la main par le test.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

/// Fenêtre factice : les événements sont rejoués un lot par `poll_events`,
/// chaque appel est journalisé.
pub struct DummyWindow {
    pub log: Rc<RefCell<Vec<String>>>,
    pub events: Rc<RefCell<VecDeque<Vec<WindowEvent>>>>,
    pub size: (u32, u32),
    pub should_close: bool,
    pub refuse_scheduling: bool,
    /// Ferme la fenêtre après ce nombre de présentations.
    pub max_frames: Option<u64>,
    pub presented: u64,
}

impl DummyWindow {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            log: Rc::new(RefCell::new(vec![])),
            events: Rc::new(RefCell::new(VecDeque::new())),
            size: (width, height),
            should_close: false,
            refuse_scheduling: false,
            max_frames: None,
            presented: 0,
        }
    }

    /// Programme un lot d'événements pour le prochain `poll_events`.
    pub fn push_events(&self, events: Vec<WindowEvent>) {
        self.events.borrow_mut().push_back(events);
    }
}

impl WindowEngine for DummyWindow {
    fn init(width: u32, height: u32, _title: &str) -> anyhow::Result<Self> {
        Ok(Self::new(width, height))
    }

    fn start_frame_scheduling(&mut self, vsync: bool) -> anyhow::Result<()> {
        if self.refuse_scheduling {
            return Err(AnimationError::SchedulingUnavailable("refused by test".into()).into());
        }
        self.log.borrow_mut().push(format!("window.start(vsync={vsync})"));
        Ok(())
    }

    fn stop_frame_scheduling(&mut self) {
        self.log.borrow_mut().push("window.stop".into());
    }

    fn set_resize_listener(&mut self, enabled: bool) {
        self.log
            .borrow_mut()
            .push(format!("window.resize_listener({enabled})"));
    }

    fn poll_events(&mut self) -> Vec<WindowEvent> {
        let events = self.events.borrow_mut().pop_front().unwrap_or_default();
        for event in &events {
            if let WindowEvent::Resized { width, height } = event {
                self.size = (*width, *height);
            }
        }
        events
    }

    fn present(&mut self) {
        self.presented += 1;
        self.log.borrow_mut().push("window.present".into());
        if self.max_frames.is_some_and(|max| self.presented >= max) {
            self.should_close = true;
        }
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, value: bool) {
        self.should_close = value;
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        self.size
    }

    fn toggle_fullscreen(&mut self) {
        self.log.borrow_mut().push("window.fullscreen".into());
    }
}

/// Un appel `draw_sprite` enregistré.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub center: Point,
    pub size: f32,
    pub alpha: f32,
}

/// Surface qui ne dessine rien mais garde la trace des appels.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub clears: usize,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.calls.clear();
    }

    fn draw_sprite(&mut self, _sprite: &Sprite, center: Point, size: f32, alpha: f32) {
        self.calls.push(DrawCall {
            center,
            size,
            alpha,
        });
    }
}

/// Renderer qui journalise ses appels sans rien dessiner.
pub struct LoggingRenderer {
    pub log: Rc<RefCell<Vec<String>>>,
    pub size: (u32, u32),
}

impl LoggingRenderer {
    pub fn new(log: Rc<RefCell<Vec<String>>>) -> Self {
        Self { log, size: (0, 0) }
    }
}

impl RendererEngine for LoggingRenderer {
    fn set_window_size(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.log
            .borrow_mut()
            .push(format!("renderer.resize({width}x{height})"));
    }

    fn surface_size(&self) -> (u32, u32) {
        self.size
    }

    fn render_frame<P: PhysicEngine>(&mut self, physic: &P) -> usize {
        self.log.borrow_mut().push("renderer.render_frame".into());
        physic.particles().len()
    }

    fn rebuild_sprite(&mut self, settings: &AnimationSettings) -> anyhow::Result<()> {
        self.log
            .borrow_mut()
            .push(format!("renderer.rebuild_sprite({})", settings.sprite_size));
        Ok(())
    }

    fn save_screenshot(&self, path: &Path) -> anyhow::Result<()> {
        self.log
            .borrow_mut()
            .push(format!("renderer.screenshot({})", path.display()));
        Ok(())
    }

    fn close(&mut self) {
        self.log.borrow_mut().push("renderer.close".into());
    }
}

/// Réglages réduits pour les tests : 1000 particules/s.
pub fn test_settings() -> AnimationSettings {
    AnimationSettings {
        capacity: 500,
        duration: 0.5,
        ..Default::default()
    }
}
