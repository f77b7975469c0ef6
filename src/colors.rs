use std::io::{self, IsTerminal};

const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy)]
pub struct Colors {
    pub error: &'static str,
    enabled: bool,
}

impl Colors {
    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self {
                error: "\x1b[31m", // Red
                enabled: true,
            }
        } else {
            Self {
                error: "",
                enabled: false,
            }
        }
    }

    pub fn reset(&self) -> &'static str {
        if self.enabled {
            RESET
        } else {
            ""
        }
    }
}

pub fn should_use_colors() -> bool {
    // Priority: NO_COLOR env > TTY detection. Status lines go to stderr, so
    // that is the stream that matters.
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    io::stderr().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_colors_are_empty() {
        let colors = Colors::new(false);
        assert_eq!(colors.error, "");
        assert_eq!(colors.reset(), "");
    }

    #[test]
    fn test_enabled_colors_emit_ansi() {
        let colors = Colors::new(true);
        assert_eq!(colors.error, "\x1b[31m");
        assert_eq!(colors.reset(), RESET);
    }
}
