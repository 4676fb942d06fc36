//! Operating system family detection.

/// Operating system families with distinct desktop integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OS {
    Windows,
    Macos,
    /// Linux, the BSDs and other freedesktop-style systems.
    Unix,
}

/// Detect the operating system this binary was built for.
pub fn detect() -> OS {
    if cfg!(target_os = "windows") {
        OS::Windows
    } else if cfg!(target_os = "macos") {
        OS::Macos
    } else {
        OS::Unix
    }
}

/// Whether a Wayland session is active.
pub fn is_wayland() -> bool {
    std::env::var_os("WAYLAND_DISPLAY").is_some_and(|v| !v.is_empty())
}
