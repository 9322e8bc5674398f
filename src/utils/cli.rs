//! Command-line argument parsing and help for heft.
//!
//! heft takes one optional positional argument, the directory to scan.
//! When invoked with no args (`heft`), the current directory is scanned.

use crate::config::Config;

#[derive(Debug, PartialEq)]
pub enum CliAction {
    RunApp,
    RunAppAtPath(String),
    Exit,
    ExitWithError,
}

pub fn handle_args() -> CliAction {
    let args: Vec<String> = std::env::args().skip(1).collect();
    parse_args(&args)
}

/// Decides what to do from the arguments after the program name.
pub fn parse_args(args: &[String]) -> CliAction {
    let Some(first) = args.first() else {
        return CliAction::RunApp;
    };

    if args.len() > 1 {
        eprintln!("Error: heft accepts only one argument at a time.");
        eprintln!("Usage: heft [PATH] or heft [OPTION]");
        return CliAction::ExitWithError;
    }

    match first.as_str() {
        "--version" | "-v" => {
            print_version();
            CliAction::Exit
        }
        "-h" | "--help" => {
            print_help();
            CliAction::Exit
        }
        "--keybinds" | "--keybind" | "--key" => {
            print_keybinds(&Config::load());
            CliAction::Exit
        }
        arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
            CliAction::RunAppAtPath(arg.to_string())
        }
        arg => {
            eprintln!("Unknown argument: {}", arg);
            eprintln!("Try --help for available options");
            CliAction::ExitWithError
        }
    }
}

fn print_version() {
    println!("heft {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"heft - Find the largest files under a directory and clean them up

USAGE:
  heft [PATH]

PATH:
  Directory (or file) to scan (defaults to current directory)

OPTIONS:
      --keybinds          Display the active keybinds
  -h, --help              Print help information
  -v, --version           Display the current installed version of heft

ENVIRONMENT:
  HEFT_CONFIG             Override the default config path (~/.config/heft/heft.toml)
"#
    );
}

fn print_keybinds(config: &Config) {
    let keys = config.keys();
    let rows: [(&str, &[String]); 9] = [
        ("go_up", keys.go_up()),
        ("go_down", keys.go_down()),
        ("go_to_top", keys.go_to_top()),
        ("go_to_bottom", keys.go_to_bottom()),
        ("delete", keys.delete()),
        ("confirm_yes", keys.confirm_yes()),
        ("confirm_no", keys.confirm_no()),
        ("rescan", keys.rescan()),
        ("quit", keys.quit()),
    ];

    println!("[keys]");
    for (name, bound) in rows {
        let quoted: Vec<String> = bound.iter().map(|k| format!("\"{}\"", k)).collect();
        println!("  {:<16} [{}]", name, quoted.join(", "));
    }
    println!();
    println!("  Syntax Reference:");
    println!("    Modifiers: <c-x> (Ctrl), <m-x>/<a-x> (Alt/Meta), <s-x> (Shift)");
    println!("    Standard:  ctrl+x, alt+x, shift+x, meta+x");
    println!("    Special:   \"space\", \"back\", \"enter\", \"esc\", \"tab\", \"home\", \"end\"");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_runs_in_cwd() {
        assert_eq!(parse_args(&[]), CliAction::RunApp);
    }

    #[test]
    fn positional_path() {
        assert_eq!(
            parse_args(&args(&["/tmp/data"])),
            CliAction::RunAppAtPath("/tmp/data".into())
        );
    }

    #[test]
    fn unknown_flag_and_extra_args_fail() {
        assert_eq!(parse_args(&args(&["--bogus"])), CliAction::ExitWithError);
        assert_eq!(parse_args(&args(&["a", "b"])), CliAction::ExitWithError);
    }

    #[test]
    fn help_and_version_exit() {
        assert_eq!(parse_args(&args(&["--help"])), CliAction::Exit);
        assert_eq!(parse_args(&args(&["-v"])), CliAction::Exit);
    }
}
