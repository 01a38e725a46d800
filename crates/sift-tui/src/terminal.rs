//! Terminal setup and restoration

use std::io::IsTerminal;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Colour is on when configured and `NO_COLOR` is unset or empty
pub fn color_enabled(configured: bool) -> bool {
    configured && std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
}

/// Standard output goes to a terminal rather than a pipe or file
pub fn stdout_is_terminal() -> bool {
    std::io::stdout().is_terminal()
}

/// Standard input is a terminal, i.e. nothing was piped in
pub fn stdin_is_terminal() -> bool {
    std::io::stdin().is_terminal()
}
