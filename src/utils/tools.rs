use log::info;

/// Versions des dépendances suivies, exportées à la compilation par `build.rs`.
pub fn dependency_versions() -> [(&'static str, &'static str); 3] {
    [
        ("GL", option_env!("GL").unwrap_or("Unknown")),
        ("GLFW", option_env!("GLFW").unwrap_or("Unknown")),
        ("IMAGE", option_env!("IMAGE").unwrap_or("Unknown")),
    ]
}

/// Affiche les informations Rust et les dépendances principales de la compilation.
pub fn show_rust_core_dependencies() {
    info!(
        "Rust compiler version: {}",
        rustc_version_runtime::version()
    );
    info!("  Platform    : {}", std::env::consts::OS);
    info!("  Arch        : {}", std::env::consts::ARCH);

    info!("Rust core dependancies");
    for (name, version) in dependency_versions() {
        info!("  {:<5} version: {}", name, version);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_rust_core_dependencies_no_panic() {
        show_rust_core_dependencies();
    }

    #[test]
    fn test_dependency_versions_are_never_empty() {
        for (name, version) in dependency_versions() {
            assert!(!name.is_empty());
            assert!(!version.is_empty());
        }
    }
}
