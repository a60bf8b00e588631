//! `configure`: generate the ChemApps Makefiles for this host.
//!
//! Detects the platform, validates the requested compilers against the
//! registry and `PATH`, and renders every `Makefile.unix` (or `Makefile.win`)
//! template below the search root into a `Makefile`.

mod commands;
mod config;
mod logging;

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

use chemapps_toolchain::{BuildType, PlatformTag, SearchPath};
use config::{CompilerConfig, ConfigureFile, InstallConfig};
use logging::LogLevel;

#[derive(Parser)]
#[command(name = "configure", version, about = "Configure the ChemApps build for this host")]
struct Cli {
    /// List supported compilers and exit
    #[arg(short, long)]
    list: bool,
    /// Print the compiler list as JSON (with --list)
    #[arg(long, requires = "list")]
    json: bool,
    /// Build with debugging flags
    #[arg(short, long)]
    debug: bool,
    /// Build with profiling flags (takes precedence over --debug)
    #[arg(short, long)]
    profile: bool,
    /// Installation prefix [$HOME]
    #[arg(long, value_name = "DIR")]
    prefix: Option<String>,
    /// Library installation directory [$HOME/lib]
    #[arg(long, value_name = "DIR")]
    libdir: Option<String>,
    /// Header installation directory [$HOME/include]
    #[arg(long, value_name = "DIR")]
    includedir: Option<String>,
    /// C compiler
    #[arg(long = "CC", value_name = "NAME")]
    cc: Option<String>,
    /// C++ compiler
    #[arg(long = "CXX", value_name = "NAME")]
    cxx: Option<String>,
    /// Fortran compiler
    #[arg(long = "FC", value_name = "NAME")]
    fc: Option<String>,
    /// Directory searched for Makefile templates [current directory]
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Diagnostic verbosity: error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL", default_value_t = LogLevel::Warn, value_parser = logging::parse_level)]
    log_level: LogLevel,
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    logging::init(cli.log_level);

    let root = match cli.root {
        Some(root) => root,
        None => std::env::current_dir().context("reading current directory")?,
    };
    let file = ConfigureFile::find_and_load(&root)?
        .map(|(file, _)| file)
        .unwrap_or_default();

    let platform = match file.platform.uname.as_deref() {
        Some(uname) => PlatformTag::from_identifier(uname),
        None => PlatformTag::detect(),
    };

    if cli.list {
        return commands::list::run(platform, cli.json);
    }

    let request = commands::configure::Request {
        build: BuildType::from_flags(cli.debug, cli.profile),
        install: InstallConfig {
            prefix: cli.prefix.or(file.install.prefix),
            libdir: cli.libdir.or(file.install.libdir),
            includedir: cli.includedir.or(file.install.includedir),
        },
        compilers: CompilerConfig {
            cc: cli.cc.or(file.compilers.cc),
            cxx: cli.cxx.or(file.compilers.cxx),
            fc: cli.fc.or(file.compilers.fc),
        },
    };
    let locator = SearchPath::from_env(platform);
    commands::configure::run(&root, platform, &request, &locator)?;
    Ok(())
}
