use anyhow::Result;

/// Événements de fenêtre utiles à l'animation, indépendants du backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// Nouvelle taille du framebuffer affiché, en pixels.
    Resized { width: u32, height: u32 },
    CloseRequested,
    ReloadConfig,
    Screenshot,
    ToggleFullscreen,
}

pub trait WindowEngine {
    fn init(width: u32, height: u32, title: &str) -> Result<Self>
    where
        Self: Sized;

    /// Demande une frame par rafraîchissement d'écran (vsync) ou au plus vite.
    /// Un refus est une erreur de démarrage.
    fn start_frame_scheduling(&mut self, vsync: bool) -> Result<()>;
    fn stop_frame_scheduling(&mut self);

    /// (Dés)inscrit l'écoute des redimensionnements.
    fn set_resize_listener(&mut self, enabled: bool);

    fn poll_events(&mut self) -> Vec<WindowEvent>;
    /// Présente la frame (swap des buffers).
    fn present(&mut self);

    fn should_close(&self) -> bool;
    fn set_should_close(&mut self, value: bool);
    fn framebuffer_size(&self) -> (u32, u32);
    fn toggle_fullscreen(&mut self);
}
