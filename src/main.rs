use std::io::Read;
use std::path::Path;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use submit_guard::change::Change;
use submit_guard::checks::default_checks;
use submit_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, Event, InitArgs};
use submit_guard::config::{CONFIG_FILE_NAME, Config};
use submit_guard::diff;
use submit_guard::error::SubmitGuardError;
use submit_guard::host::HostEnv;
use submit_guard::output::{
    ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use submit_guard::runner::Runner;
use submit_guard::{EXIT_CHECKS_FAILED, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

/// Upper bound on the `git diff` subprocess when building the change.
const GIT_DIFF_TIMEOUT: Duration = Duration::from_secs(30);

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> submit_guard::Result<i32> {
    let config = load_config(args, cli)?;
    let change = load_change(args)?;

    let mut env = HostEnv::detect(&args.repo_root);
    if args.no_tools {
        env = env.without_tools();
    }

    let checks = default_checks(&config, &env)?;
    let runner = Runner::new(checks).with_parallel(args.parallel);

    let report = match args.event {
        Event::Upload => runner.on_upload(&change),
        Event::Commit => runner.on_commit(&change),
    };

    let output = match args.format {
        OutputFormat::Text => {
            TextFormatter::new(color_choice_to_mode(cli.color)).format(&report)?
        }
        OutputFormat::Json => JsonFormatter::new().format(&report)?,
    };
    if !(cli.quiet && report.is_empty()) {
        print!("{output}");
    }

    Ok(if report.has_errors() {
        EXIT_CHECKS_FAILED
    } else {
        EXIT_SUCCESS
    })
}

fn load_config(args: &CheckArgs, cli: &Cli) -> submit_guard::Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }
    match &args.config {
        Some(path) => Config::load(path),
        None => Config::discover(&args.repo_root),
    }
}

fn load_change(args: &CheckArgs) -> submit_guard::Result<Change> {
    if let Some(path) = &args.diff_file {
        let text = read_diff_input(path)?;
        return diff::parse_unified_diff(&text);
    }

    let base = args.base.as_deref().unwrap_or("HEAD");
    diff::change_from_git(&args.repo_root, base, GIT_DIFF_TIMEOUT)
}

fn read_diff_input(path: &Path) -> submit_guard::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    std::fs::read_to_string(path).map_err(|source| SubmitGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

fn run_init(args: &InitArgs) -> i32 {
    let target = args.path.join(CONFIG_FILE_NAME);
    if target.exists() && !args.force {
        eprintln!(
            "Error: {} already exists (use --force to overwrite)",
            target.display()
        );
        return EXIT_CONFIG_ERROR;
    }
    if let Err(e) = std::fs::write(&target, Config::template()) {
        eprintln!("Error: failed to write {}: {e}", target.display());
        return EXIT_CONFIG_ERROR;
    }
    println!("Created {}", target.display());
    EXIT_SUCCESS
}
