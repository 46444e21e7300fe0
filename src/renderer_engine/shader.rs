use anyhow::{anyhow, Result};
use gl::types::*;
use std::ffi::CString;
use std::ptr;

/// Shaders du quad plein écran qui présente la surface CPU.
pub const PRESENT_VERTEX_SRC: &str = r#"
#version 330 core
layout(location = 0) in vec2 aPos;
layout(location = 1) in vec2 aUv;

out vec2 vUv;

void main() {
    vUv = aUv;
    gl_Position = vec4(aPos, 0.0, 1.0);
}
"#;

pub const PRESENT_FRAGMENT_SRC: &str = r#"
#version 330 core
in vec2 vUv;
out vec4 FragColor;

uniform sampler2D uSurface;

void main() {
    FragColor = texture(uSurface, vUv);
}
"#;

/// Lit le journal de compilation d'un shader ou d'un programme.
unsafe fn info_log(object: u32, is_program: bool) -> String {
    let mut len = 0;
    if is_program {
        gl::GetProgramiv(object, gl::INFO_LOG_LENGTH, &mut len);
    } else {
        gl::GetShaderiv(object, gl::INFO_LOG_LENGTH, &mut len);
    }
    let mut buf = vec![0u8; len.max(1) as usize];
    if is_program {
        gl::GetProgramInfoLog(object, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
    } else {
        gl::GetShaderInfoLog(object, len, ptr::null_mut(), buf.as_mut_ptr() as *mut GLchar);
    }
    String::from_utf8_lossy(&buf)
        .trim_end_matches('\0')
        .to_string()
}

unsafe fn compile_shader(src: &str, ty: GLenum) -> Result<u32> {
    let shader = gl::CreateShader(ty);
    let c_str = CString::new(src)?;
    gl::ShaderSource(shader, 1, &c_str.as_ptr(), ptr::null());
    gl::CompileShader(shader);

    let mut success = gl::FALSE as GLint;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut success);
    if success != gl::TRUE as GLint {
        let log = info_log(shader, false);
        gl::DeleteShader(shader);
        return Err(anyhow!("❌ Shader compilation failed:\n{}", log));
    }
    Ok(shader)
}

/// Compile et lie un programme vertex + fragment.
///
/// # Safety
/// Un contexte OpenGL valide doit être courant sur ce thread.
pub unsafe fn try_compile_shader_program(vertex_src: &str, fragment_src: &str) -> Result<u32> {
    let vs = compile_shader(vertex_src, gl::VERTEX_SHADER)?;
    let fs = match compile_shader(fragment_src, gl::FRAGMENT_SHADER) {
        Ok(fs) => fs,
        Err(e) => {
            gl::DeleteShader(vs);
            return Err(e);
        }
    };

    let program = gl::CreateProgram();
    gl::AttachShader(program, vs);
    gl::AttachShader(program, fs);
    gl::LinkProgram(program);
    gl::DeleteShader(vs);
    gl::DeleteShader(fs);

    let mut success = gl::FALSE as GLint;
    gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
    if success != gl::TRUE as GLint {
        let log = info_log(program, true);
        gl::DeleteProgram(program);
        return Err(anyhow!("❌ Shader link failed:\n{}", log));
    }
    Ok(program)
}
