//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a
//! clean interface for the main application logic. It supports the standard
//! help, version, and debug flags while gracefully handling unknown options.

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// One-shot report of the current solar state
    Status {
        debug_enabled: bool,
        config_path: Option<String>,
        /// Pin the clock to "YYYY-MM-DD HH:MM:SS" instead of now
        at: Option<String>,
    },
    /// Periodically sample and announce each horizon crossing
    Watch {
        debug_enabled: bool,
        config_path: Option<String>,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments, program name already
    ///   skipped
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut debug_enabled = false;
        let mut config_path: Option<String> = None;
        let mut at: Option<String> = None;
        let mut command: Option<String> = None;

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_ref() {
                "--help" | "-h" => {
                    return ParsedArgs {
                        action: CliAction::ShowHelp,
                    };
                }
                "--version" | "-V" => {
                    return ParsedArgs {
                        action: CliAction::ShowVersion,
                    };
                }
                "--debug" | "-d" => debug_enabled = true,
                "--config" | "-c" => match iter.next() {
                    Some(value) => config_path = Some(value.as_ref().to_string()),
                    None => {
                        return ParsedArgs {
                            action: CliAction::ShowHelpDueToError,
                        };
                    }
                },
                "--at" => match iter.next() {
                    Some(value) => at = Some(value.as_ref().to_string()),
                    None => {
                        return ParsedArgs {
                            action: CliAction::ShowHelpDueToError,
                        };
                    }
                },
                "status" | "watch" if command.is_none() => {
                    command = Some(arg.as_ref().to_string())
                }
                _ => {
                    return ParsedArgs {
                        action: CliAction::ShowHelpDueToError,
                    };
                }
            }
        }

        let action = match command.as_deref() {
            Some("watch") => {
                if at.is_some() {
                    // Pinning the clock makes no sense for a live loop
                    CliAction::ShowHelpDueToError
                } else {
                    CliAction::Watch {
                        debug_enabled,
                        config_path,
                    }
                }
            }
            _ => CliAction::Status {
                debug_enabled,
                config_path,
                at,
            },
        };
        ParsedArgs { action }
    }
}

/// Print usage information.
pub fn display_help() {
    println!("sunsetter v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("Usage: sunsetter [COMMAND] [OPTIONS]");
    println!();
    println!("Commands:");
    println!("  status              Report today's solar state (default)");
    println!("  watch               Sample periodically and announce each crossing");
    println!();
    println!("Options:");
    println!("  -c, --config <PATH> Use an explicit configuration file");
    println!("      --at <TIME>     Report as of \"YYYY-MM-DD HH:MM:SS\" (status only)");
    println!("  -d, --debug         Enable diagnostic output");
    println!("  -h, --help          Print help");
    println!("  -V, --version       Print version");
}

/// Print version information.
pub fn display_version() {
    println!("sunsetter v{}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_a_status_report() {
        let parsed = ParsedArgs::parse(Vec::<String>::new());
        assert_eq!(
            parsed.action,
            CliAction::Status {
                debug_enabled: false,
                config_path: None,
                at: None,
            }
        );
    }

    #[test]
    fn parses_watch_with_flags() {
        let parsed = ParsedArgs::parse(["watch", "--debug", "--config", "/tmp/s.toml"]);
        assert_eq!(
            parsed.action,
            CliAction::Watch {
                debug_enabled: true,
                config_path: Some("/tmp/s.toml".to_string()),
            }
        );
    }

    #[test]
    fn rejects_watch_with_a_pinned_clock() {
        let parsed = ParsedArgs::parse(["watch", "--at", "2021-06-21 12:00:00"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn unknown_arguments_show_help() {
        let parsed = ParsedArgs::parse(["--frobnicate"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }

    #[test]
    fn missing_flag_values_show_help() {
        let parsed = ParsedArgs::parse(["--config"]);
        assert_eq!(parsed.action, CliAction::ShowHelpDueToError);
    }
}
