//! `configure`: resolve the toolchain and write a Makefile for every template.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use chemapps_template::{discover, output_path, render, InstallDirs, Substitutions, Toolchain};
use chemapps_toolchain::{default_for, select, BuildType, ExecutableLocator, PlatformTag, Role};

use crate::config::{CompilerConfig, InstallConfig};

/// What the user asked for, after merging flags over `configure.toml`.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub build: BuildType,
    pub install: InstallConfig,
    pub compilers: CompilerConfig,
}

/// Everything a run substitutes into the templates.
#[derive(Debug, Clone)]
pub struct Plan {
    pub platform: PlatformTag,
    pub build: BuildType,
    pub dirs: InstallDirs,
    pub toolchain: Toolchain,
}

impl Plan {
    pub fn substitutions(&self) -> Substitutions {
        Substitutions::new(self.platform, &self.dirs, self.build, &self.toolchain)
    }
}

/// Fill in install directories the user left out. Defaults live under the
/// home directory, so `home` is only required when something is missing.
pub fn install_dirs(
    platform: PlatformTag,
    install: &InstallConfig,
    home: Option<&str>,
) -> Result<InstallDirs> {
    let under_home = |sub: &str| -> Result<String> {
        let home = home.ok_or_else(|| {
            anyhow!(
                "{} is not set; pass --prefix, --libdir and --includedir explicitly",
                platform.home_variable()
            )
        })?;
        if sub.is_empty() {
            return Ok(home.to_string());
        }
        Ok(Path::new(home).join(sub).display().to_string())
    };

    Ok(InstallDirs {
        prefix: match &install.prefix {
            Some(p) => p.clone(),
            None => under_home("")?,
        },
        libdir: match &install.libdir {
            Some(p) => p.clone(),
            None => under_home("lib")?,
        },
        includedir: match &install.includedir {
            Some(p) => p.clone(),
            None => under_home("include")?,
        },
    })
}

/// Validate and resolve one compiler per role, C first.
pub fn select_toolchain<L: ExecutableLocator + ?Sized>(
    platform: PlatformTag,
    compilers: &CompilerConfig,
    build: BuildType,
    locator: &L,
) -> Result<Toolchain> {
    let pick = |role: Role| {
        let name = compilers
            .get(role)
            .unwrap_or_else(|| default_for(platform, role).name());
        select(name, platform, role, build, locator)
    };
    Ok(Toolchain {
        cc: pick(Role::C)?,
        cxx: pick(Role::Cxx)?,
        fc: pick(Role::Fortran)?,
    })
}

pub fn plan<L: ExecutableLocator + ?Sized>(
    platform: PlatformTag,
    request: &Request,
    home: Option<&str>,
    locator: &L,
) -> Result<Plan> {
    let toolchain = select_toolchain(platform, &request.compilers, request.build, locator)?;
    let dirs = install_dirs(platform, &request.install, home)?;
    Ok(Plan {
        platform,
        build: request.build,
        dirs,
        toolchain,
    })
}

/// Configure every template below `root`. Returns the Makefiles written.
pub fn run<L: ExecutableLocator + ?Sized>(
    root: &Path,
    platform: PlatformTag,
    request: &Request,
    locator: &L,
) -> Result<Vec<PathBuf>> {
    let home = std::env::var(platform.home_variable()).ok();
    let plan = plan(platform, request, home.as_deref(), locator)?;
    print_summary(&plan);

    let templates = discover(root, platform)?;
    let subs = plan.substitutions();
    let mut written = Vec::with_capacity(templates.len());
    for template in &templates {
        let makefile = output_path(template);
        let shown = makefile.strip_prefix(root).unwrap_or(&makefile);
        println!("Configuring {} ...", shown.display());
        written.push(render(template, &subs).context("writing Makefiles")?);
    }
    tracing::info!(count = written.len(), "configuration complete");

    print_make_targets(platform.make_tool());
    Ok(written)
}

fn print_summary(plan: &Plan) {
    println!("Operating system:     {}", plan.platform);
    println!();
    println!("Installation prefix:  {}", plan.dirs.prefix);
    println!();
    for role in Role::ALL {
        let compiler = plan.toolchain.get(role);
        let label = format!("{role} compiler:");
        println!("{label:<22}{} {}", compiler.name(), compiler.flags());
    }
    println!();
    println!("libdir:               {}", plan.dirs.libdir);
    println!("includedir:           {}", plan.dirs.includedir);
    println!();
    match plan.build {
        BuildType::Debug => println!("Debugging is specified\n"),
        BuildType::Profile => println!("Profiling is specified\n"),
        BuildType::Optimize => {}
    }
}

const MAKE_TARGETS: [(&str, &str); 7] = [
    ("", "compile program/library"),
    ("tests", "compile/run test cases"),
    ("doc", "compile documentation"),
    ("install", "install program/library"),
    ("uninstall", "uninstall program/library"),
    ("clean", "remove some generated files"),
    ("distclean", "remove all generated files"),
];

fn print_make_targets(make: &str) {
    println!("\nYou now have the following options:\n");
    let width = make.len() + 10;
    for (target, description) in MAKE_TARGETS {
        let command = if target.is_empty() {
            make.to_string()
        } else {
            format!("{make} {target}")
        };
        println!("  {command:<width$} - {description}");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    use chemapps_toolchain::{CompilerId, ToolchainError, UnsupportedReason};

    const GNU: &[&str] = &["gcc", "g++", "gfortran"];

    #[test]
    fn defaults_live_under_home() {
        let dirs = install_dirs(PlatformTag::Linux, &InstallConfig::default(), Some("/home/chem")).unwrap();
        assert_eq!(dirs.prefix, "/home/chem");
        assert_eq!(dirs.libdir, Path::new("/home/chem").join("lib").display().to_string());
        assert_eq!(
            dirs.includedir,
            Path::new("/home/chem").join("include").display().to_string()
        );
    }

    #[test]
    fn explicit_dirs_need_no_home() {
        let install = InstallConfig {
            prefix: Some("/opt/chem".into()),
            libdir: Some("/opt/chem/lib64".into()),
            includedir: Some("/opt/chem/include".into()),
        };
        let dirs = install_dirs(PlatformTag::Linux, &install, None).unwrap();
        assert_eq!(dirs.libdir, "/opt/chem/lib64");
    }

    #[test]
    fn missing_home_names_the_variable() {
        let install = InstallConfig {
            prefix: Some("/opt/chem".into()),
            ..Default::default()
        };
        let err = install_dirs(PlatformTag::Windows, &install, None).unwrap_err();
        assert!(err.to_string().contains("USERPROFILE"));
    }

    #[test]
    fn default_toolchain_on_linux() {
        let toolchain = select_toolchain(
            PlatformTag::Linux,
            &CompilerConfig::default(),
            BuildType::Optimize,
            GNU,
        )
        .unwrap();
        assert_eq!(toolchain.cc.id(), CompilerId::Gcc);
        assert_eq!(toolchain.cxx.id(), CompilerId::Gxx);
        assert_eq!(toolchain.fc.id(), CompilerId::Gfortran);
    }

    #[test]
    fn requested_compiler_must_be_on_path() {
        let compilers = CompilerConfig {
            cxx: Some("icpc".into()),
            ..Default::default()
        };
        let err = select_toolchain(PlatformTag::Linux, &compilers, BuildType::Debug, GNU).unwrap_err();
        let err = err.downcast::<ToolchainError>().unwrap();
        assert!(matches!(
            err,
            ToolchainError::UnsupportedCompiler {
                role: Role::Cxx,
                reason: UnsupportedReason::NotFound,
                ..
            }
        ));
    }

    #[test]
    fn plan_carries_build_type() {
        let request = Request {
            build: BuildType::Profile,
            ..Default::default()
        };
        let plan = plan(PlatformTag::Linux, &request, Some("/home/chem"), GNU).unwrap();
        assert_eq!(plan.toolchain.fc.build(), BuildType::Profile);
        assert_eq!(plan.substitutions().get(chemapps_template::Placeholder::Defs), "-DARMA_NO_DEBUG");
    }

    #[test]
    fn run_writes_makefiles() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("src")).unwrap();
        std::fs::write(
            dir.path().join("src").join("Makefile.unix"),
            "CC = @cc@\nLDFLAGS = @ldflags@\n",
        )
        .unwrap();
        let request = Request {
            install: InstallConfig {
                prefix: Some("/opt/chem".into()),
                libdir: Some("/opt/chem/lib".into()),
                includedir: Some("/opt/chem/include".into()),
            },
            ..Default::default()
        };

        let written = run(dir.path(), PlatformTag::Linux, &request, GNU).unwrap();
        assert_eq!(written, vec![dir.path().join("src").join("Makefile")]);
        let text = std::fs::read_to_string(&written[0]).unwrap();
        assert_eq!(text, "CC = gcc\nLDFLAGS = -L\"/opt/chem/lib\"\n");
    }
}
