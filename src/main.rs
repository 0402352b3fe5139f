use anyhow::{Context, Result as AnyhowResult};
use clap::Parser;
use crossterm::event::{read as event_read, Event as CrosstermEvent, KeyEventKind};
use popular_settings::app::{load_view, App};
use popular_settings::config::{DirectoryContext, PanelPaths};
use popular_settings::config_io::JsonSettingsStore;
use popular_settings::services::extensions::LocalExtensionRegistry;
use popular_settings::services::host::SystemOpener;
use popular_settings::services::terminal_modes::{self, TerminalModes};
use popular_settings::services::{log_dirs, tracing_setup};
use popular_settings::settings::{Catalog, ConfigurationStore, ExtensionRegistry, HostActions};
use popular_settings::view::markup::render_markup;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;

/// Browse and edit the most popular editor settings
#[derive(Parser, Debug)]
#[command(name = "popular-settings")]
#[command(about = "A terminal panel for the most commonly changed editor settings", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the user settings.json (default: <config dir>/Code/User/settings.json)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Directory of installed extensions scanned for color themes
    #[arg(long, value_name = "PATH")]
    extensions_dir: Option<PathBuf>,

    /// Extra catalog groups to append to the built-in catalog
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Path to log file (default: per-process file in the state directory)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Print the panel as a standalone HTML document and exit
    #[arg(long)]
    html: bool,

    /// Print the paths used by the panel and exit
    #[arg(long)]
    show_paths: bool,
}

struct Services {
    catalog: Arc<Catalog>,
    store: Arc<dyn ConfigurationStore>,
    extensions: Arc<dyn ExtensionRegistry>,
    host: Arc<dyn HostActions>,
}

fn resolve_paths(args: &Args) -> AnyhowResult<PanelPaths> {
    let dirs = DirectoryContext::from_system().context("Failed to determine system directories")?;
    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(log_dirs::main_log_path);
    Ok(PanelPaths::resolve(
        &dirs,
        args.settings.clone(),
        args.extensions_dir.clone(),
        args.catalog.clone(),
        log_file,
    ))
}

fn build_services(paths: &PanelPaths) -> AnyhowResult<Services> {
    let catalog = match &paths.catalog {
        Some(path) => Catalog::builtin_with_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin().clone(),
    };
    tracing::info!(
        "Catalog has {} settings in {} groups",
        catalog.len(),
        catalog.groups().len()
    );

    Ok(Services {
        catalog: Arc::new(catalog),
        store: Arc::new(JsonSettingsStore::new(&paths.settings)),
        extensions: Arc::new(LocalExtensionRegistry::new(&paths.extensions_dir)),
        host: Arc::new(SystemOpener::new(&paths.settings)),
    })
}

fn run_event_loop(
    app: &mut App,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &tokio::runtime::Runtime,
) -> AnyhowResult<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        match event_read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                runtime.block_on(app.handle_key(key));
            }
            CrosstermEvent::Resize(..) => terminal.clear()?,
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

fn main() -> AnyhowResult<()> {
    let args = Args::parse();
    let paths = resolve_paths(&args)?;

    if args.show_paths {
        paths.print();
        return Ok(());
    }

    if !tracing_setup::init_global(&paths.log_file) {
        eprintln!(
            "Warning: could not open log file {}",
            paths.log_file.display()
        );
    }
    log_dirs::cleanup_stale_logs();
    tracing::info!("Settings panel starting");

    let services = build_services(&paths)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("Failed to start async runtime")?;

    if args.html {
        let view = runtime.block_on(load_view(
            &services.catalog,
            services.store.as_ref(),
            services.extensions.as_ref(),
        ));
        print!("{}", render_markup(&view));
        return Ok(());
    }

    let mut app = runtime.block_on(App::new(
        services.catalog,
        services.store,
        services.extensions,
        services.host,
    ));

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        terminal_modes::emergency_cleanup();
        original_hook(panic);
    }));

    let mut modes = TerminalModes::enable()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    let result = run_event_loop(&mut app, &mut terminal, &runtime);

    modes.undo();
    tracing::info!("Settings panel exiting");
    result
}
