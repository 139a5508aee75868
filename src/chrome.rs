//! Window chrome derived from the configuration. Pure data, applied to the
//! real window in `main.rs`.

use crate::cfg::{InstallerConfig, Mode};

pub const DEFAULT_WIDTH: i32 = 800;
pub const DEFAULT_HEIGHT: i32 = 600;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Presentation {
    Fullscreen,
    Windowed { width: i32, height: i32 },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct WindowChrome {
    pub title: &'static str,
    pub css_class: &'static str,
    pub presentation: Presentation,
}

impl WindowChrome {
    pub const fn for_config(config: &InstallerConfig) -> Self {
        let (title, css_class) = match config.mode {
            Mode::Normal => ("Installer", "normal-mode"),
            Mode::Oem => ("Installer — OEM Mode", "oem-mode"),
            Mode::Recovery => ("Installer — Recovery Mode", "recovery-mode"),
        };
        Self {
            title,
            css_class,
            presentation: if config.fullscreen {
                Presentation::Fullscreen
            } else {
                Presentation::Windowed {
                    width: DEFAULT_WIDTH,
                    height: DEFAULT_HEIGHT,
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(mode: Mode, fullscreen: bool) -> InstallerConfig {
        InstallerConfig {
            mode,
            fullscreen,
            ..Default::default()
        }
    }

    #[test]
    fn title_and_class_follow_mode() {
        let chrome = WindowChrome::for_config(&config(Mode::Normal, false));
        assert_eq!((chrome.title, chrome.css_class), ("Installer", "normal-mode"));

        let chrome = WindowChrome::for_config(&config(Mode::Oem, false));
        assert_eq!(
            (chrome.title, chrome.css_class),
            ("Installer — OEM Mode", "oem-mode")
        );

        let chrome = WindowChrome::for_config(&config(Mode::Recovery, false));
        assert_eq!(
            (chrome.title, chrome.css_class),
            ("Installer — Recovery Mode", "recovery-mode")
        );
    }

    #[test]
    fn fullscreen_flag_selects_presentation() {
        assert_eq!(
            WindowChrome::for_config(&config(Mode::Normal, true)).presentation,
            Presentation::Fullscreen
        );
        assert_eq!(
            WindowChrome::for_config(&config(Mode::Normal, false)).presentation,
            Presentation::Windowed {
                width: 800,
                height: 600
            }
        );
    }
}
