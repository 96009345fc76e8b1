pub const BG: &str = "#111216";
pub const GOLD: &str = "#c9a96e";
pub const GREY: &str = "#73737d";
pub const PURPLE: &str = "#6166dc";
pub const ILLO: &str = "#93c3ea";

/// Widest viewport that still gets the tablet layout.
pub const DESKTOP_BREAKPOINT: u32 = 1024;

/// Whether the animated desktop variant of a section should be shown.
pub fn is_desktop(viewport_width: u32) -> bool {
    viewport_width > DESKTOP_BREAKPOINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_starts_above_breakpoint() {
        assert!(!is_desktop(0));
        assert!(!is_desktop(1024));
        assert!(is_desktop(1025));
    }
}
