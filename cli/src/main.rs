//! WTLayout CLI: the command-line entry point for inspecting saved layouts.

use std::io::Read;
use std::path::PathBuf;
use std::process;

use tracing::debug;
use wtlayout_core::command::Command;
use wtlayout_core::response::Response;
use wtlayout_core::sys::Sys;
use wtlayout_core::EngineSettings;


fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let arg_refs: Vec<&str> = args[1..].iter().map(|s| s.as_str()).collect();

    let cmd = match parse_args(&arg_refs).and_then(read_stdin_input) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("wtlayout: {}", e);
            process::exit(1);
        }
    };

    let config_path = resolve_config_dir().join("config.yaml");
    debug!(path = %config_path.display(), "loading settings");
    let settings = match EngineSettings::from_file(&config_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("wtlayout: {}", e);
            process::exit(1);
        }
    };

    let mut sys = Sys::new(settings);
    match sys.execute(cmd) {
        Response::Ok { output } => {
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Response::Error { message } => {
            eprintln!("wtlayout error: {}", message);
            process::exit(1);
        }
    }
}


fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("WTLAYOUT_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wtlayout")
}


/// `state parse` takes its document from stdin.
fn read_stdin_input(cmd: Command) -> Result<Command, String> {
    match cmd {
        Command::StateParse { input, format } if input.is_empty() => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Failed to read stdin: {}", e))?;
            Ok(Command::StateParse { input: buf, format })
        }
        other => Ok(other),
    }
}


fn parse_args(args: &[&str]) -> Result<Command, String> {
    if args.is_empty() {
        return Err("No command specified. Run 'wtlayout help' for usage.".into());
    }

    match args[0] {
        "help" | "--help" | "-h" => Ok(Command::Help {
            topic: if args.len() > 1 {
                Some(args[1..].join(" "))
            } else {
                None
            },
        }),
        "state" => parse_state(args),
        "folder" => parse_folder(args),
        _ => Err(format!("Unknown command: '{}'. Run 'wtlayout help' for usage.", args[0])),
    }
}


fn parse_state(args: &[&str]) -> Result<Command, String> {
    if args.len() < 2 {
        return Err("Usage: wtlayout state <inspect|parse> ...".into());
    }
    let format = find_flag(args, "--format");
    match args[1] {
        "inspect" => {
            if args.len() < 3 || args[2].starts_with("--") {
                return Err("Usage: wtlayout state inspect <path> [--format json|text]".into());
            }
            Ok(Command::StateInspect {
                path: args[2].into(),
                format,
            })
        }
        "parse" => Ok(Command::StateParse {
            input: String::new(),
            format,
        }),
        _ => Err(format!("Unknown state subcommand: '{}'", args[1])),
    }
}


fn parse_folder(args: &[&str]) -> Result<Command, String> {
    if args.len() < 3 {
        return Err("Usage: wtlayout folder <summary|list|duplicate|delete> <path>".into());
    }
    match args[1] {
        "summary" => Ok(Command::FolderSummary {
            path: args[2].into(),
        }),
        "list" => Ok(Command::FolderList {
            path: args[2].into(),
        }),
        "duplicate" => Ok(Command::FolderDuplicate {
            path: args[2].into(),
            base: find_flag(args, "--base"),
            name: find_flag(args, "--name"),
        }),
        "delete" => Ok(Command::FolderDelete {
            path: args[2].into(),
        }),
        _ => Err(format!("Unknown folder subcommand: '{}'", args[1])),
    }
}


fn find_flag(args: &[&str], flag: &str) -> Option<String> {
    for (i, arg) in args.iter().enumerate() {
        if *arg == flag {
            return args.get(i + 1).map(|s| s.to_string());
        }
    }
    None
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_args_is_error() {
        assert!(parse_args(&[]).is_err());
    }

    #[test]
    fn state_inspect_with_format() {
        let cmd = parse_args(&["state", "inspect", "state.json", "--format", "text"]).unwrap();
        assert_eq!(
            cmd,
            Command::StateInspect {
                path: "state.json".into(),
                format: Some("text".into()),
            }
        );
    }

    #[test]
    fn state_inspect_requires_path() {
        assert!(parse_args(&["state", "inspect"]).is_err());
        assert!(parse_args(&["state", "inspect", "--format", "json"]).is_err());
    }

    #[test]
    fn state_parse_has_empty_input_until_stdin_read() {
        let cmd = parse_args(&["state", "parse"]).unwrap();
        assert_eq!(
            cmd,
            Command::StateParse {
                input: String::new(),
                format: None,
            }
        );
    }

    #[test]
    fn folder_commands() {
        assert_eq!(
            parse_args(&["folder", "list", "/tmp"]).unwrap(),
            Command::FolderList { path: "/tmp".into() }
        );
        assert!(parse_args(&["folder", "move", "/tmp"]).is_err());
    }

    #[test]
    fn folder_duplicate_flags() {
        assert_eq!(
            parse_args(&["folder", "duplicate", "/ls", "--name", "work"]).unwrap(),
            Command::FolderDuplicate {
                path: "/ls".into(),
                base: None,
                name: Some("work".into()),
            }
        );
        assert_eq!(
            parse_args(&["folder", "delete", "/ls/copy"]).unwrap(),
            Command::FolderDelete {
                path: "/ls/copy".into()
            }
        );
    }

    #[test]
    fn help_topic_joined() {
        assert_eq!(
            parse_args(&["help", "state", "inspect"]).unwrap(),
            Command::Help {
                topic: Some("state inspect".into())
            }
        );
    }

    #[test]
    fn unknown_command() {
        let err = parse_args(&["launch"]).unwrap_err();
        assert!(err.contains("launch"));
    }
}
