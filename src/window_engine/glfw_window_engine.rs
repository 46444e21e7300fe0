use anyhow::Result;
use glfw::{Action, Context, Key, SwapInterval, WindowMode};
use log::{debug, info, warn};

use super::r#trait::{WindowEngine, WindowEvent};
use crate::error::AnimationError;
use crate::utils::glfw_window::{CenterWindow, Fullscreen};

pub type GlfwEvents = glfw::GlfwReceiver<(f64, glfw::WindowEvent)>;

pub struct GlfwWindowEngine {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: GlfwEvents,

    resize_listener: bool,
    scheduling: bool,
    // restauration après plein écran
    window_last_pos: (i32, i32),
    window_last_size: (i32, i32),
}

impl WindowEngine for GlfwWindowEngine {
    fn init(width: u32, height: u32, title: &str) -> Result<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| AnimationError::WindowInit(format!("Impossible d'initialiser GLFW: {e:?}")))?;

        glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
        glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(
            glfw::OpenGlProfileHint::Core,
        ));
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));

        let (mut window, events) = glfw
            .create_window(width, height, title, WindowMode::Windowed)
            .ok_or_else(|| AnimationError::WindowInit("Erreur création fenêtre GLFW".into()))?;

        window.make_current();
        window.set_key_polling(true);
        window.set_close_polling(true);
        window.center_on_primary_monitor();

        info!("✅ OpenGL context ready for '{}'", title);

        // load OpenGL function pointers
        gl::load_with(|s| window.get_proc_address(s) as *const _);

        let window_last_pos = window.get_pos();
        let window_last_size = window.get_size();

        Ok(Self {
            glfw,
            window,
            events,
            resize_listener: false,
            scheduling: false,
            window_last_pos,
            window_last_size,
        })
    }

    fn start_frame_scheduling(&mut self, vsync: bool) -> Result<()> {
        if !self.window.is_current() {
            return Err(AnimationError::SchedulingUnavailable(
                "OpenGL context is not current on the render thread".into(),
            )
            .into());
        }
        self.glfw.set_swap_interval(if vsync {
            SwapInterval::Sync(1)
        } else {
            SwapInterval::None
        });
        self.scheduling = true;
        debug!("Frame scheduling started (vsync = {})", vsync);
        Ok(())
    }

    fn stop_frame_scheduling(&mut self) {
        self.scheduling = false;
    }

    fn set_resize_listener(&mut self, enabled: bool) {
        self.resize_listener = enabled;
        self.window.set_framebuffer_size_polling(enabled);
    }

    fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.glfw.poll_events();

        let mut out = Vec::new();
        for (_, event) in glfw::flush_messages(&self.events) {
            match event {
                glfw::WindowEvent::FramebufferSize(w, h) if self.resize_listener => {
                    out.push(WindowEvent::Resized {
                        width: w.max(0) as u32,
                        height: h.max(0) as u32,
                    });
                }
                glfw::WindowEvent::Close => out.push(WindowEvent::CloseRequested),
                glfw::WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
                    out.push(WindowEvent::CloseRequested)
                }
                glfw::WindowEvent::Key(Key::R, _, Action::Press, _) => {
                    out.push(WindowEvent::ReloadConfig)
                }
                glfw::WindowEvent::Key(Key::S, _, Action::Press, _) => {
                    out.push(WindowEvent::Screenshot)
                }
                glfw::WindowEvent::Key(Key::F11, _, Action::Press, _) => {
                    out.push(WindowEvent::ToggleFullscreen)
                }
                _ => {}
            }
        }
        out
    }

    fn present(&mut self) {
        if self.scheduling {
            self.window.swap_buffers();
        }
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }

    fn framebuffer_size(&self) -> (u32, u32) {
        let (w, h) = self.window.get_framebuffer_size();
        (w.max(0) as u32, h.max(0) as u32)
    }

    fn toggle_fullscreen(&mut self) {
        if self.window.is_fullscreen() {
            let (x, y) = self.window_last_pos;
            let (w, h) = self.window_last_size;
            self.window
                .set_monitor(WindowMode::Windowed, x, y, w as u32, h as u32, None);
            info!("🖥️ Windowed: {} x {}", w, h);
            return;
        }

        self.window_last_pos = self.window.get_pos();
        self.window_last_size = self.window.get_size();

        let mut glfw = self.glfw.clone();
        let window = &mut self.window;
        glfw.with_primary_monitor(|_, primary_monitor| match primary_monitor {
            Some(mon) => {
                window.set_fullscreen(mon);
                info!("🖥️ Fullscreen: {:?}", window.get_framebuffer_size());
            }
            None => warn!("⚠️ No primary monitor, staying windowed"),
        });
    }
}
