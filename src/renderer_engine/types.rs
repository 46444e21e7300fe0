use bytemuck::{Pod, Zeroable};
use gl::types::*;
use memoffset::offset_of;
use std::mem;

/// Sommet du quad plein écran (position NDC + coordonnées de texture).
///
/// | Location | Type   | Champ |
/// |:--------:|:-------|:------|
/// | `0`      | `vec2` | `pos` |
/// | `1`      | `vec2` | `uv`  |
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct QuadVertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
}

/// Quad en `TRIANGLE_STRIP`. La ligne 0 du framebuffer CPU est en haut :
/// v = 0 sur le bord haut de l'écran.
pub const FULLSCREEN_QUAD: [QuadVertex; 4] = [
    QuadVertex { pos: [-1.0, 1.0], uv: [0.0, 0.0] },
    QuadVertex { pos: [-1.0, -1.0], uv: [0.0, 1.0] },
    QuadVertex { pos: [1.0, 1.0], uv: [1.0, 0.0] },
    QuadVertex { pos: [1.0, -1.0], uv: [1.0, 1.0] },
];

impl QuadVertex {
    /// Déclare les attributs de sommets.
    ///
    /// ⚠️ Pré-requis : le VAO et le VBO du quad doivent être liés.
    pub fn setup_vertex_attribs() {
        let stride = mem::size_of::<Self>() as GLsizei;
        unsafe {
            gl::VertexAttribPointer(
                0,
                2,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(QuadVertex, pos) as *const _,
            );
            gl::EnableVertexAttribArray(0);

            gl::VertexAttribPointer(
                1,
                2,
                gl::FLOAT,
                gl::FALSE,
                stride,
                offset_of!(QuadVertex, uv) as *const _,
            );
            gl::EnableVertexAttribArray(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_vertex_layout() {
        assert_eq!(mem::size_of::<QuadVertex>(), 16);
        assert_eq!(offset_of!(QuadVertex, uv), 8);
        let bytes: &[u8] = bytemuck::cast_slice(&FULLSCREEN_QUAD);
        assert_eq!(bytes.len(), 64);
    }

    #[test]
    fn test_top_of_screen_samples_first_row() {
        for v in FULLSCREEN_QUAD.iter() {
            let expected_v = if v.pos[1] > 0.0 { 0.0 } else { 1.0 };
            assert_eq!(v.uv[1], expected_v);
        }
    }
}
