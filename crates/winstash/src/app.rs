use clap::{Arg, ArgAction, ArgGroup, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("winstash")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Capture and restore desktop window layouts")
        .long_about("winstash saves the open windows of a GNOME Shell session (program, working directory, position and size) as a named workspace, and later relaunches every program and moves its window back into place.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("capture")
                .about("Save the open windows as a named workspace")
                .arg(
                    Arg::new("name")
                        .help("Workspace name (optional when only closing, rebooting or shutting down)")
                        .index(1)
                )
                .arg(
                    Arg::new("manage")
                        .long("manage")
                        .short('m')
                        .help("Choose which windows to include before saving")
                        .action(ArgAction::SetTrue)
                        .requires("name")
                )
                .arg(
                    Arg::new("close")
                        .long("close")
                        .short('c')
                        .help("Close every window afterwards")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("shutdown")
                        .long("shutdown")
                        .short('s')
                        .help("Close every window and power off afterwards")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("reboot")
                        .long("reboot")
                        .short('r')
                        .help("Close every window and reboot afterwards")
                        .action(ArgAction::SetTrue)
                )
                .group(
                    ArgGroup::new("final-action")
                        .args(["close", "shutdown", "reboot"])
                        .multiple(false)
                )
        )
        .subcommand(
            Command::new("restore")
                .about("Relaunch a saved workspace and move its windows into place")
                .arg(
                    Arg::new("name")
                        .help("Workspace name")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("timeout")
                        .long("timeout")
                        .help("Seconds to wait for each window to appear (overrides config)")
                        .value_parser(value_parser!(u64).range(1..))
                )
                .arg(
                    Arg::new("close-terminal")
                        .long("close-terminal")
                        .help("Close terminal windows that were open before restoring")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("list")
                .about("List saved workspaces")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("delete")
                .about("Delete one or more saved workspaces")
                .arg(
                    Arg::new("names")
                        .help("Workspace names")
                        .required(true)
                        .num_args(1..)
                        .index(1)
                )
        )
        .subcommand(
            Command::new("windows")
                .about("List the currently open windows")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("details")
                .about("Show geometry and metadata for one open window")
                .arg(
                    Arg::new("id")
                        .help("Window id (see 'winstash windows')")
                        .required(true)
                        .index(1)
                        .value_parser(value_parser!(u64))
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
}
