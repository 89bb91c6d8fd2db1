use std::fs;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use hms::config::{generate_config, HmsConfig, DEFAULT_CONFIG_FILE};
use hms::input::{EditorInput, InputSource, LineInput};
use hms::report::write_report;
use hms::shell::Shell;
use hms_model::SystemClock;
use hms_registry::Hospital;
use hms_store::FileStore;

#[derive(Debug, Parser)]
#[command(
    name = "hms",
    version,
    about = "Hospital record manager for patients, doctors and emergency cases",
    long_about = "hms keeps patients, doctors, appointments and emergency cases in memory\n\
        and saves patients and doctors to two comma-delimited files.\n\n\
        EXAMPLES:\n\
        \n  hms                          Start the interactive menu\n\
        \n  hms --data-dir /srv/ward     Use files in another directory\n\
        \n  hms report                   Print the saved patients and doctors\n\
        \n  hms init                     Write a default hms.toml"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: hms.toml in the current directory)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Directory holding patients.csv and doctors.csv (overrides the config)
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive menu (default)
    #[command(
        about = "Run the interactive patient, doctor and emergency menus",
        long_about = "Run the interactive menus.\n\n\
            Choose entries by number; 0 goes back or exits. Both files are saved\n\
            after every change and again on exit (also on Ctrl-D)."
    )]
    Menu(MenuArgs),

    /// Print saved patients and doctors
    Report,

    /// Write a default configuration file
    Init,
}

#[derive(Debug, Args, Default)]
struct MenuArgs {
    /// Read answers line by line from stdin without line editing
    #[arg(long)]
    script: bool,
}

fn init_logging(verbose: u8, default_level: &str) {
    let level = match verbose {
        0 => default_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn open_hospital(config: &HmsConfig) -> Hospital<FileStore> {
    let store = config.file_store();
    log::debug!("using data directory '{}'", store.dir().display());
    Hospital::open(store, SystemClock)
}

fn run_menu<I: InputSource>(hospital: Hospital<FileStore>, input: I) -> i32 {
    let mut shell = Shell::new(hospital, input, io::stdout());
    match shell.run() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

fn run_init(path: &Path) -> i32 {
    if path.exists() {
        eprintln!("error: '{}' already exists", path.display());
        return 2;
    }
    match fs::write(path, generate_config()) {
        Ok(()) => {
            println!("Created {}", path.display());
            0
        }
        Err(e) => {
            eprintln!("error: failed to write '{}': {e}", path.display());
            2
        }
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if let Some(Command::Init) = cli.command {
        init_logging(cli.verbose, "warn");
        return run_init(&config_path);
    }

    let mut config = match HmsConfig::load(&config_path, cli.config.is_some()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    init_logging(cli.verbose, &config.log_level);

    match cli.command.unwrap_or(Command::Menu(MenuArgs::default())) {
        Command::Menu(args) => {
            let hospital = open_hospital(&config);
            if args.script || !io::stdin().is_terminal() {
                return run_menu(hospital, LineInput::new(io::stdin().lock()));
            }
            match EditorInput::new() {
                Ok(input) => run_menu(hospital, input),
                Err(e) => {
                    eprintln!("error: failed to initialize line editor: {e}");
                    2
                }
            }
        }
        Command::Report => {
            let hospital = open_hospital(&config);
            match write_report(&hospital, &mut io::stdout()) {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("error: {e}");
                    1
                }
            }
        }
        Command::Init => run_init(&config_path),
    }
}

fn main() {
    std::process::exit(run_cli());
}
