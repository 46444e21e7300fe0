use anyhow::Result;
use log::{debug, info};
use std::path::Path;

use crate::cstr;
use crate::physic_engine::{config::AnimationSettings, PhysicEngine};
use crate::renderer_engine::{
    config::RendererConfig,
    shader::{try_compile_shader_program, PRESENT_FRAGMENT_SRC, PRESENT_VERTEX_SRC},
    software_renderer::SoftwareRenderer,
    tools::{setup_opengl_debug, show_opengl_context_info},
    types::{QuadVertex, FULLSCREEN_QUAD},
    RendererEngine,
};

/// Renderer OpenGL : les particules sont composées sur CPU par un
/// `SoftwareRenderer`, puis la surface est envoyée dans une texture et
/// affichée sur un quad plein écran.
pub struct Renderer {
    software: SoftwareRenderer,
    config: RendererConfig,

    vao: u32,
    vbo_quad: u32,
    shader_program: u32,
    loc_surface: i32,
    texture_id: u32,
    /// Taille de la texture allouée côté GPU.
    texture_size: (u32, u32),
}

impl Renderer {
    /// Crée le renderer. Le contexte OpenGL doit être courant (voir
    /// `GlfwWindowEngine::init`).
    pub fn new(
        width: u32,
        height: u32,
        settings: &AnimationSettings,
        config: &RendererConfig,
    ) -> Result<Self> {
        // sprite + surface d'abord : un échec ici ne laisse aucune ressource GL
        let software = SoftwareRenderer::new(width, height, settings)?;

        unsafe {
            show_opengl_context_info();
            if config.gl_debug {
                setup_opengl_debug();
            }
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }

        let shader_program =
            unsafe { try_compile_shader_program(PRESENT_VERTEX_SRC, PRESENT_FRAGMENT_SRC)? };
        let loc_surface = unsafe { gl::GetUniformLocation(shader_program, cstr!("uSurface")) };

        let (vao, vbo_quad, texture_id) = unsafe { setup_gpu_resources() };

        info!("✅ OpenGL renderer ready ({} x {})", width, height);

        Ok(Self {
            software,
            config: config.clone(),
            vao,
            vbo_quad,
            shader_program,
            loc_surface,
            texture_id,
            texture_size: (0, 0),
        })
    }

    pub fn software(&self) -> &SoftwareRenderer {
        &self.software
    }

    /// Envoie le framebuffer CPU dans la texture (réallouée si la taille change).
    unsafe fn upload_surface(&mut self) {
        let framebuffer = self.software.framebuffer();
        let (w, h) = (framebuffer.width(), framebuffer.height());

        gl::BindTexture(gl::TEXTURE_2D, self.texture_id);
        gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
        if self.texture_size != (w, h) {
            debug!("🔁 Surface texture reallocated: {} x {}", w, h);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA8 as i32,
                w as i32,
                h as i32,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                framebuffer.as_raw().as_ptr() as *const _,
            );
            self.texture_size = (w, h);
        } else {
            gl::TexSubImage2D(
                gl::TEXTURE_2D,
                0,
                0,
                0,
                w as i32,
                h as i32,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                framebuffer.as_raw().as_ptr() as *const _,
            );
        }
    }
}

unsafe fn setup_gpu_resources() -> (u32, u32, u32) {
    let (mut vao, mut vbo_quad, mut texture_id) = (0u32, 0u32, 0u32);

    gl::GenVertexArrays(1, &mut vao);
    gl::BindVertexArray(vao);

    gl::GenBuffers(1, &mut vbo_quad);
    gl::BindBuffer(gl::ARRAY_BUFFER, vbo_quad);
    let bytes: &[u8] = bytemuck::cast_slice(&FULLSCREEN_QUAD);
    gl::BufferData(
        gl::ARRAY_BUFFER,
        bytes.len() as isize,
        bytes.as_ptr() as *const _,
        gl::STATIC_DRAW,
    );
    QuadVertex::setup_vertex_attribs();
    gl::BindVertexArray(0);

    gl::GenTextures(1, &mut texture_id);
    gl::BindTexture(gl::TEXTURE_2D, texture_id);
    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::CLAMP_TO_EDGE as i32);
    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::CLAMP_TO_EDGE as i32);
    // la texture a la taille exacte de la fenêtre : pas de filtrage
    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::NEAREST as i32);
    gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::NEAREST as i32);
    gl::BindTexture(gl::TEXTURE_2D, 0);

    (vao, vbo_quad, texture_id)
}

impl RendererEngine for Renderer {
    fn set_window_size(&mut self, width: u32, height: u32) {
        self.software.set_window_size(width, height);
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }
    }

    fn surface_size(&self) -> (u32, u32) {
        self.software.surface_size()
    }

    fn render_frame<P: PhysicEngine>(&mut self, physic: &P) -> usize {
        let drawn = self.software.render_frame(physic);

        let [r, g, b, a] = self.config.background_color;
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT);

            let (w, h) = self.software.surface_size();
            if w == 0 || h == 0 {
                return drawn;
            }

            self.upload_surface();

            gl::UseProgram(self.shader_program);
            gl::ActiveTexture(gl::TEXTURE0);
            gl::BindTexture(gl::TEXTURE_2D, self.texture_id);
            gl::Uniform1i(self.loc_surface, 0);
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLE_STRIP, 0, FULLSCREEN_QUAD.len() as i32);
            gl::BindVertexArray(0);
        }
        drawn
    }

    fn rebuild_sprite(&mut self, settings: &AnimationSettings) -> Result<()> {
        self.software.rebuild_sprite(settings)
    }

    fn save_screenshot(&self, path: &Path) -> Result<()> {
        self.software.save_screenshot(path)
    }

    fn close(&mut self) {
        self.software.close();
        unsafe {
            gl::DeleteTextures(1, &self.texture_id);
            gl::DeleteBuffers(1, &self.vbo_quad);
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteProgram(self.shader_program);
        }
        (self.texture_id, self.vbo_quad, self.vao, self.shader_program) = (0, 0, 0, 0);
        self.texture_size = (0, 0);
        info!("OpenGL renderer closed");
    }
}
