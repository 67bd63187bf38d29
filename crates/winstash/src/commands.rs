use clap::ArgMatches;
use tracing::{error, info, warn};

use winstash_core::capture::CaptureOutcome;
use winstash_core::config::WinstashConfig;
use winstash_core::events;
use winstash_core::power::{self, FinalAction};
use winstash_core::store::store_file_path;
use winstash_core::{
    BackendError, CaptureEngine, CaptureRequest, GnomeShellBackend, RestoreEngine, RestoreOptions,
    SystemProcesses, WindowBackend, WindowOutcome, WorkspaceRepository,
};

use crate::prompt::PromptSelector;
use crate::table::WindowTable;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> WinstashConfig {
    match WinstashConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.winstash/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            WinstashConfig::default()
        }
    }
}

/// The desktop backend, checked for `gdbus` before any window is touched.
fn connect_backend() -> Result<GnomeShellBackend, BackendError> {
    let backend = GnomeShellBackend::new();
    if let Err(e) = backend.ensure_available() {
        error!(event = "cli.backend_unavailable", program = backend.program());
        return Err(e);
    }
    Ok(backend)
}

fn open_repository(config: &WinstashConfig) -> WorkspaceRepository {
    WorkspaceRepository::open(store_file_path(&config.storage))
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("capture", sub_matches)) => handle_capture_command(sub_matches),
        Some(("restore", sub_matches)) => handle_restore_command(sub_matches),
        Some(("list", sub_matches)) => handle_list_command(sub_matches),
        Some(("delete", sub_matches)) => handle_delete_command(sub_matches),
        Some(("windows", sub_matches)) => handle_windows_command(sub_matches),
        Some(("details", sub_matches)) => handle_details_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

fn final_action_from(matches: &ArgMatches) -> Option<FinalAction> {
    if matches.get_flag("reboot") {
        Some(FinalAction::Reboot)
    } else if matches.get_flag("shutdown") {
        Some(FinalAction::Shutdown)
    } else if matches.get_flag("close") {
        Some(FinalAction::CloseWindows)
    } else {
        None
    }
}

fn handle_capture_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches.get_one::<String>("name");
    let manage = matches.get_flag("manage");
    let final_action = final_action_from(matches);

    if name.is_none() && final_action.is_none() {
        return Err(
            "A workspace name is required unless --close, --reboot or --shutdown is given".into(),
        );
    }

    let config = load_config_with_warning();
    let backend = connect_backend()?;

    info!(
        event = "cli.capture_started",
        name = ?name,
        manage = manage,
        final_action = ?final_action
    );

    if let Some(name) = name {
        let processes = SystemProcesses;
        let selector = PromptSelector;
        let mut repo = open_repository(&config);
        let engine = CaptureEngine::new(&backend, &processes, &selector, &config.capture);
        let request = CaptureRequest::new(name.clone()).with_manage(manage);

        let report = match engine.capture(&request, &mut repo) {
            Ok(report) => report,
            Err(e) => {
                error!(event = "cli.capture_failed", name = name, error = %e);
                return Err(e.into());
            }
        };

        match report.outcome {
            CaptureOutcome::Saved { replaced } => {
                let verb = if replaced { "replaced" } else { "saved" };
                println!(
                    "✅ Workspace '{}' {} with {} window(s).",
                    report.name, verb, report.captured
                );
                for skipped in &report.skipped {
                    println!("   Skipped {}: {}", skipped.label, skipped.reason);
                }
            }
            CaptureOutcome::Declined => {
                println!("Kept existing workspace '{}'.", report.name);
            }
        }

        info!(
            event = "cli.capture_completed",
            name = report.name,
            captured = report.captured,
            skipped = report.skipped.len()
        );
    }

    if let Some(action) = final_action {
        let closed = power::perform_final_action(&backend, action)?;
        println!("Closed {} window(s).", closed);
        match action {
            FinalAction::Reboot => println!("Rebooting..."),
            FinalAction::Shutdown => println!("Shutting down..."),
            FinalAction::CloseWindows => {}
        }
        info!(event = "cli.final_action_completed", action = ?action, closed = closed);
    }

    Ok(())
}

fn handle_restore_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("name")
        .ok_or("Name argument is required")?;

    let mut config = load_config_with_warning();

    // Apply CLI overrides only if provided
    if let Some(timeout) = matches.get_one::<u64>("timeout") {
        config.restore.timeout_secs = Some(*timeout);
    }
    if matches.get_flag("close-terminal") {
        config.restore.close_terminal = true;
    }

    info!(
        event = "cli.restore_started",
        name = name,
        timeout_secs = config.restore.timeout_secs(),
        close_terminal = config.restore.close_terminal
    );

    let repo = open_repository(&config);
    repo.get(name)?;
    let backend = connect_backend()?;
    let processes = SystemProcesses;
    let engine = RestoreEngine::new(
        &backend,
        &processes,
        RestoreOptions::from(&config.restore),
    );

    let report = match engine.restore(name, &repo) {
        Ok(report) => report,
        Err(e) => {
            error!(event = "cli.restore_failed", name = name, error = %e);
            return Err(e.into());
        }
    };

    for window in &report.windows {
        match &window.outcome {
            WindowOutcome::Placed { window_id } => {
                println!("✅ {} ({}) → window {}", window.key, window.executable, window_id)
            }
            WindowOutcome::NotFound => println!(
                "⚠️  {} ({}) started, but no window appeared in time",
                window.key, window.executable
            ),
            WindowOutcome::SpawnFailed { message } => {
                println!("❌ {} ({}) failed to start: {}", window.key, window.executable, message)
            }
            WindowOutcome::Failed { message } => {
                println!("❌ {} ({}) skipped: {}", window.key, window.executable, message)
            }
        }
    }

    if !report.closed_terminals.is_empty() {
        println!("Closed {} terminal window(s).", report.closed_terminals.len());
    }

    println!(
        "Restored {}/{} window(s) of '{}'.",
        report.placed_count(),
        report.windows.len(),
        report.name
    );

    info!(
        event = "cli.restore_completed",
        name = report.name,
        placed = report.placed_count(),
        total = report.windows.len()
    );

    Ok(())
}

fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.list_started", json_output = json_output);

    let config = load_config_with_warning();
    let repo = open_repository(&config);
    let workspaces = repo.list_workspaces();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&workspaces)?);
    } else if workspaces.is_empty() {
        println!("No saved workspaces.");
    } else {
        println!("Saved workspaces:");
        for workspace in &workspaces {
            println!("  {} ({} window(s))", workspace.name, workspace.window_count);
        }
    }

    info!(event = "cli.list_completed", count = workspaces.len());

    Ok(())
}

fn handle_delete_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let names: Vec<String> = matches
        .get_many::<String>("names")
        .ok_or("At least one workspace name is required")?
        .cloned()
        .collect();

    info!(event = "cli.delete_started", count = names.len());

    let config = load_config_with_warning();
    let mut repo = open_repository(&config);
    let report = repo.delete_workspaces(&names)?;

    for name in &report.deleted {
        println!("✅ Deleted workspace '{}'.", name);
    }
    for name in &report.missing {
        println!("Workspace '{}' not found.", name);
    }

    info!(
        event = "cli.delete_completed",
        deleted = report.deleted.len(),
        missing = report.missing.len()
    );

    Ok(())
}

fn handle_windows_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.windows_started", json_output = json_output);

    let backend = connect_backend()?;
    let windows = backend.list_windows()?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&windows)?);
    } else if windows.is_empty() {
        println!("No open windows.");
    } else {
        WindowTable::new(&windows).print_table(&windows);
    }

    info!(event = "cli.windows_completed", count = windows.len());

    Ok(())
}

fn handle_details_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let id = *matches
        .get_one::<u64>("id")
        .ok_or("Window id argument is required")?;
    let json_output = matches.get_flag("json");

    info!(event = "cli.details_started", window_id = id);

    let backend = connect_backend()?;
    let details = backend.get_details(id)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        let window = &details.window;
        println!("Window {}", window.id);
        println!("   Title: {}", window.title);
        println!("   Class: {} ({})", window.wm_class, window.wm_class_instance);
        println!(
            "   PID: {}",
            window.pid.map_or("unknown".to_string(), |pid| pid.to_string())
        );
        println!("   Position: {}, {}", details.x, details.y);
        println!("   Size: {} x {}", details.width, details.height);
        println!("   Focused: {}", window.focused);
    }

    info!(event = "cli.details_completed", window_id = id);

    Ok(())
}
