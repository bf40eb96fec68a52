//! Help system for WTLayout commands.

pub fn help_text(topic: Option<&str>) -> String {
    match topic {
        None => overview(),
        Some(t) => {
            if let Some(text) = command_help(t) {
                return text;
            }
            if let Some(text) = group_help(t) {
                return text;
            }
            format!("Unknown help topic: '{}'. Run 'wtlayout help' for a list of commands.", t)
        }
    }
}


fn overview() -> String {
    "\
wtlayout — inspect saved terminal window layouts

Usage: wtlayout <command> [args...]

State commands:
  state inspect <path> [--format json|text]   Reconstruct the layout in a state file
  state parse [--format json|text]            Reconstruct the layout from stdin

Folder commands:
  folder summary <path>                       Summarize a LocalState folder
  folder list <path>                          List LocalState copies under a directory
  folder duplicate <path> [--base <dir>] [--name <name>]
                                              Copy settings.json and state.json to a new folder
  folder delete <path>                        Delete a LocalState copy

  help [topic]                                Show help

Run 'wtlayout help <command>' for detailed help on a specific command."
        .into()
}


fn group_help(group: &str) -> Option<String> {
    let text = match group {
        "state" => "\
State commands — replay a persisted window layout

  state inspect <path> [--format json|text]
    Read state.json or elevated-state.json and print every tab with its
    grid size and each pane's row, column and spans. Icons come from the
    settings.json in the same folder, when present.

  state parse [--format json|text]
    Same as inspect, reading the document from stdin.",
        "folder" => "\
Folder commands — work with LocalState folders

  folder summary <path>
    Report settings.json profiles, state files and their layouts.

  folder list <path>
    List the subfolders of <path>, each one a saved LocalState copy.

  folder duplicate <path> [--base <dir>] [--name <name>]
    Copy settings.json and state.json (recursively) into a new folder.

  folder delete <path>
    Delete a folder and its contents. The default folder is refused.",
        _ => return None,
    };
    Some(text.into())
}


fn command_help(command: &str) -> Option<String> {
    let text = match command {
        "inspect" | "state inspect" => "\
wtlayout state inspect <path> [--format json|text]

Replays the first persisted window layout in <path>. Files whose name does
not end in 'state.json' produce no layout. JSON output is an array of tabs
(or null when the file holds no layout).",
        "parse" | "state parse" => "\
wtlayout state parse [--format json|text]

Reads a state.json document from stdin and prints its layout.",
        "summary" | "folder summary" => "\
wtlayout folder summary <path>

Prints a JSON summary of settings.json, state.json and elevated-state.json
in the folder: sizes, modification times, profiles and layouts.",
        "list" | "folder list" => "\
wtlayout folder list <path>

Prints a JSON array of {name, path} for every subfolder of <path>.",
        "duplicate" | "folder duplicate" => "\
wtlayout folder duplicate <path> [--base <dir>] [--name <name>]

Creates <base>/<name> holding only the settings.json and state.json files of
<path> and its subfolders. <base> defaults to custom_base from config.yaml,
then to the parent of <path>. <name> defaults to LocalState_<yyyyMMdd_HHmmss>.
Fails if the destination already exists. Prints the new folder's summary.",
        "delete" | "folder delete" => "\
wtlayout folder delete <path>

Deletes <path> and everything under it. The terminal's own folder, set as
default_folder in config.yaml, is never deleted.",
        _ => return None,
    };
    Some(text.into())
}
