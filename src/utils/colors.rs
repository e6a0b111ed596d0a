/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Color used for an agenda row kind.
pub fn color_for_kind(kind: &str) -> &'static str {
    match kind {
        "client" => GREEN,
        "recurring" => MAGENTA,
        "blocked" => RED,
        _ => RESET,
    }
}
