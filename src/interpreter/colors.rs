//! ANSI foreground color escapes.
//!
//! Backs the synthetic `RESET` and `COLOR:` variables and the red used for
//! runtime diagnostics.

/// Reset the foreground color.
pub fn reset() -> &'static str {
    "\x1b[39m"
}

/// Indexed terminal color (0-255).
pub fn number(n: u8) -> String {
    format!("\x1b[38;5;{}m", n)
}

/// True-color foreground.
pub fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Wrap text in red for diagnostics.
pub fn red(text: &str) -> String {
    format!("\x1b[31m{}\x1b[39m", text)
}
