use is_terminal::IsTerminal;

/// Styling options for rendered frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub color: bool,
    pub unicode: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            color: true,
            unicode: true,
        }
    }
}

pub fn detect_render_options() -> RenderOptions {
    detect_render_options_impl(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
    )
}

fn detect_render_options_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> RenderOptions {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");
    let no_color = get_env("NO_COLOR").is_some();

    RenderOptions {
        color: is_tty && !term_is_dumb && !no_color,
        unicode: !term_is_dumb,
    }
}
