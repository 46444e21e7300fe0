use gl::types::*;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::ffi::CStr;
use std::os::raw::c_void;
use std::sync::Mutex;

lazy_static::lazy_static! {
    /// Nombre d'occurrences par identifiant de message de debug OpenGL.
    static ref MESSAGE_COUNT: Mutex<HashMap<u32, u32>> = Mutex::new(HashMap::new());
}

/// Un message répété n'est relogué qu'une fois toutes les `REPEAT_LOG_EVERY` occurrences.
const REPEAT_LOG_EVERY: u32 = 120;

#[macro_export]
macro_rules! cstr {
    ($s:expr) => {
        concat!($s, "\0").as_ptr() as *const std::os::raw::c_char
    };
}

unsafe fn gl_string(name: GLenum) -> String {
    let ptr = gl::GetString(name);
    if ptr.is_null() {
        return "Unknown".into();
    }
    CStr::from_ptr(ptr as *const GLchar)
        .to_string_lossy()
        .into_owned()
}

/// Affiche les informations OpenGL / GPU du contexte actuel
/// # Safety
///
/// L'appelant doit s'assurer que le contexte OpenGL est valide et actif.
pub unsafe fn show_opengl_context_info() {
    info!("🖥 OpenGL context info:");
    info!("  Vendor   : {}", gl_string(gl::VENDOR));
    info!("  Renderer : {}", gl_string(gl::RENDERER));
    info!("  OpenGL   : {}", gl_string(gl::VERSION));
    info!("  GLSL     : {}", gl_string(gl::SHADING_LANGUAGE_VERSION));

    let mut max_texture_size = 0;
    gl::GetIntegerv(gl::MAX_TEXTURE_SIZE, &mut max_texture_size);
    debug!("  GL_MAX_TEXTURE_SIZE = {}", max_texture_size);

    let err = gl::GetError();
    if err != gl::NO_ERROR {
        warn!("glerror consumed after getting context info: 0x{:X}", err);
    }
}

/// Décide si un message doit être logué, en comptant ses occurrences.
fn should_log_message(id: u32) -> bool {
    let mut counts = match MESSAGE_COUNT.lock() {
        Ok(counts) => counts,
        Err(poisoned) => poisoned.into_inner(),
    };
    let count = counts.entry(id).or_insert(0);
    *count += 1;
    *count == 1 || *count % REPEAT_LOG_EVERY == 0
}

extern "system" fn gl_debug_callback(
    _source: GLenum,
    type_: GLenum,
    id: GLuint,
    severity: GLenum,
    _length: GLsizei,
    message: *const GLchar,
    _user_param: *mut c_void,
) {
    if severity == gl::DEBUG_SEVERITY_NOTIFICATION || !should_log_message(id) {
        return;
    }

    let msg = unsafe { CStr::from_ptr(message).to_string_lossy() };
    let sev_str = match severity {
        gl::DEBUG_SEVERITY_HIGH => "High",
        gl::DEBUG_SEVERITY_MEDIUM => "Medium",
        gl::DEBUG_SEVERITY_LOW => "Low",
        _ => "Unknown",
    };

    if type_ == gl::DEBUG_TYPE_ERROR {
        warn!("[OpenGL Error] id: {:X}, severity: {}, {}", id, sev_str, msg);
    } else {
        debug!("[OpenGL Debug] id: {:X}, severity: {}, {}", id, sev_str, msg);
    }
}

/// Configure le debug OpenGL via `glDebugMessageCallback`.
///
/// # Safety
///
/// Le contexte OpenGL doit être actif (≥ 4.3 ou `KHR_debug`, sinon l'appel
/// est ignoré).
pub unsafe fn setup_opengl_debug() {
    if !gl::DebugMessageCallback::is_loaded() {
        debug!("glDebugMessageCallback unavailable, GL debug output disabled");
        return;
    }
    gl::Enable(gl::DEBUG_OUTPUT);
    gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
    gl::DebugMessageCallback(Some(gl_debug_callback), std::ptr::null());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cstr_macro() {
        let ptr = cstr!("uSurface");
        let c_str = unsafe { CStr::from_ptr(ptr) };
        assert_eq!(c_str.to_str().unwrap(), "uSurface");
    }

    #[test]
    fn test_repeated_messages_are_throttled() {
        let id = 0xC0FFEE;
        assert!(should_log_message(id));
        let logged = (1..REPEAT_LOG_EVERY).filter(|_| should_log_message(id)).count();
        // seule la 120e occurrence est relogguée
        assert_eq!(logged, 1);
    }
}
