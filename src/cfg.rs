use clap::Parser;

/// Installer mode, selected on the command line. Affects the window title,
/// the style class on the window, and the Welcome page copy; nothing else.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    #[default]
    Normal,
    Oem,
    Recovery,
}

/// Process-wide configuration, built once from the command line and read-only
/// afterwards. Passed into the app component explicitly; there is no global.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct InstallerConfig {
    pub mode: Mode,
    pub fullscreen: bool,
    pub debug: bool,
    pub show_version: bool,
    pub show_help: bool,
}

// clap's automatic help/version would exit from inside the parser; both are
// disabled so parsing stays a pure args -> config function and the early
// exit is main's decision.
#[derive(Parser, Debug)]
#[command(
    name = "slipstream",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Show version information
    #[arg(long, short = 'V')]
    version: bool,

    /// Show help information
    #[arg(long, short = 'h')]
    help: bool,

    /// Run in OEM mode
    #[arg(long, short = 'O')]
    oem: bool,

    /// Run in recovery mode
    #[arg(long, short = 'R')]
    recovery: bool,

    /// Run in fullscreen mode
    #[arg(long, short = 'f')]
    fullscreen: bool,

    /// Enable debug output
    #[arg(long, short = 'd')]
    debug: bool,
}

impl From<Cli> for InstallerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            // --recovery is evaluated after --oem and wins when both are given
            mode: if cli.recovery {
                Mode::Recovery
            } else if cli.oem {
                Mode::Oem
            } else {
                Mode::Normal
            },
            fullscreen: cli.fullscreen,
            debug: cli.debug,
            show_version: cli.version,
            show_help: cli.help,
        }
    }
}

/// Parse the process arguments. Unrecognized flags get clap's own
/// diagnostics and a non-zero exit, nothing of ours.
pub fn from_env() -> InstallerConfig {
    Cli::parse().into()
}

#[cfg(test)]
pub fn from_args<I, T>(args: I) -> InstallerConfig
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(args).into()
}

pub const USAGE: &str = "\
Usage: slipstream [OPTIONS]

Options:
  -V, --version     Show version information
  -h, --help        Show help information
  -O, --oem         Run in OEM mode
  -R, --recovery    Run in recovery mode
  -f, --fullscreen  Run in fullscreen mode
  -d, --debug       Enable debug output";

pub const VERSION_LINE: &str =
    const_format::concatcp!("Slipstream Installer v", env!("CARGO_PKG_VERSION"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(from_args(["slipstream"]), InstallerConfig::default());
        assert_eq!(InstallerConfig::default().mode, Mode::Normal);
    }

    #[test]
    fn each_flag_sets_its_field() {
        assert_eq!(from_args(["slipstream", "--oem"]).mode, Mode::Oem);
        assert_eq!(from_args(["slipstream", "-R"]).mode, Mode::Recovery);
        assert!(from_args(["slipstream", "--fullscreen"]).fullscreen);
        assert!(from_args(["slipstream", "-d"]).debug);
        assert!(from_args(["slipstream", "-h"]).show_help);
    }

    #[test]
    fn recovery_beats_oem() {
        assert_eq!(
            from_args(["slipstream", "--oem", "--recovery"]).mode,
            Mode::Recovery
        );
        assert_eq!(
            from_args(["slipstream", "--recovery", "--oem"]).mode,
            Mode::Recovery
        );
    }

    #[test]
    fn version_sticks_regardless_of_other_flags() {
        for args in [
            vec!["slipstream", "--version"],
            vec!["slipstream", "-V", "--oem", "-f", "-d"],
            vec!["slipstream", "--recovery", "--version"],
        ] {
            assert!(from_args(args).show_version);
        }
    }

    #[test]
    fn fullscreen_and_debug_are_independent() {
        let cfg = from_args(["slipstream", "-f", "-d"]);
        assert!(cfg.fullscreen && cfg.debug);
        let cfg = from_args(["slipstream", "-f"]);
        assert!(cfg.fullscreen && !cfg.debug);
    }

    #[test]
    fn usage_names_every_flag() {
        for flag in ["--version", "--help", "--oem", "--recovery", "--fullscreen", "--debug"] {
            assert!(USAGE.contains(flag), "usage is missing {flag}");
        }
    }

    #[test]
    fn version_line_is_fixed() {
        assert!(VERSION_LINE.starts_with("Slipstream Installer v"));
    }
}
