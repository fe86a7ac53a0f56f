use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use paintshop::config::{ColorMode, Config};
use paintshop::presentation::{ColorWhen, OutputFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub format: OutputFormat,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        Self::from_caps(json, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color,
            },
        };

        Self {
            format: OutputFormat::from_flag(json),
            caps,
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }

    pub fn json(&self) -> bool {
        self.format.is_json()
    }

    /// Interactive prompts need a terminal on both ends
    pub fn can_prompt(&self) -> bool {
        !self.json() && self.caps.stdin_tty && self.caps.stdout_tty
    }
}
