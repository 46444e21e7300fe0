use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Couleur de fond de la fenêtre (RGBA, 0..1), sous la surface des particules.
    pub background_color: [f32; 4],
    /// Synchronisation verticale (cadence d'une frame par rafraîchissement).
    /// Sans vsync, une cadence supérieure à `capacity / duration` frames par
    /// seconde n'émet plus aucune particule (émission arrondie par frame).
    pub vsync: bool,
    /// Active le callback `glDebugMessageCallback`.
    pub gl_debug: bool,
    /// Dossier des captures d'écran (touche S).
    pub screenshot_dir: String,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            background_color: [0.07, 0.02, 0.05, 1.0],
            vsync: true,
            gl_debug: cfg!(debug_assertions),
            screenshot_dir: "screenshots".into(),
        }
    }
}

impl RendererConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    pub fn save_to_file(&self, path: &str) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
