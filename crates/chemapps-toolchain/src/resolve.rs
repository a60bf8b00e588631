//! Compiler selection and flag assembly.

use crate::compiler::{supported, BuildType, CompilerId, FlagProfile, Role};
use crate::error::{Result, ToolchainError, UnsupportedReason};
use crate::locate::ExecutableLocator;
use crate::platform::PlatformTag;

/// A compiler chosen for one role, with its flags fixed for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCompiler {
    role: Role,
    id: CompilerId,
    build: BuildType,
    flags: String,
}

impl ResolvedCompiler {
    pub fn role(&self) -> Role {
        self.role
    }

    pub fn id(&self) -> CompilerId {
        self.id
    }

    pub fn build(&self) -> BuildType {
        self.build
    }

    /// Name reported to the user and written into the Makefile.
    pub fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Language, warning and build-type flags.
    pub fn flags(&self) -> &str {
        &self.flags
    }

    pub fn profile(&self) -> &'static FlagProfile {
        self.id.profile()
    }

    pub fn depflag(&self) -> &'static str {
        self.profile().depflag
    }

    pub fn modflag(&self) -> &'static str {
        self.profile().modflag
    }

    pub fn shared_flag(&self) -> &'static str {
        self.profile().shared_flag
    }

    pub fn shared_ldflag(&self) -> &'static str {
        self.profile().shared_ldflag
    }

    /// Archiver name, empty when the compiler needs none in particular.
    pub fn libexe(&self) -> &'static str {
        self.profile().libexe.unwrap_or("")
    }
}

/// Default compiler for `role` on `platform`.
pub fn default_for(platform: PlatformTag, role: Role) -> CompilerId {
    supported(platform, role)[0]
}

/// Check that `name` is supported for `role` on `platform` and that the
/// executable can be found.
pub fn validate<L: ExecutableLocator + ?Sized>(
    name: &str,
    platform: PlatformTag,
    role: Role,
    locator: &L,
) -> Result<CompilerId> {
    let unsupported = |reason| ToolchainError::UnsupportedCompiler {
        role,
        name: name.to_string(),
        reason,
    };

    let id = CompilerId::lookup(name, platform, role)
        .ok_or_else(|| unsupported(UnsupportedReason::NotSupported(platform)))?;

    match locator.locate(name) {
        Some(path) => {
            tracing::debug!(%role, compiler = name, path = %path.display(), "found compiler");
            Ok(id)
        }
        None => Err(unsupported(UnsupportedReason::NotFound)),
    }
}

/// Assemble the flag string for a validated compiler.
pub fn resolve(id: CompilerId, role: Role, build: BuildType) -> ResolvedCompiler {
    let profile = id.profile();
    let flags = [profile.langflag, profile.warnflag, profile.build_flag(build)]
        .into_iter()
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    ResolvedCompiler {
        role,
        id,
        build,
        flags,
    }
}

/// Validate `name` and resolve its flags in one step.
pub fn select<L: ExecutableLocator + ?Sized>(
    name: &str,
    platform: PlatformTag,
    role: Role,
    build: BuildType,
    locator: &L,
) -> Result<ResolvedCompiler> {
    let id = validate(name, platform, role, locator)?;
    let resolved = resolve(id, role, build);
    tracing::debug!(%role, compiler = resolved.name(), flags = resolved.flags(), "resolved compiler");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLATFORMS: [PlatformTag; 5] = [
        PlatformTag::Linux,
        PlatformTag::Cygwin,
        PlatformTag::Windows,
        PlatformTag::MacOS,
        PlatformTag::Other,
    ];

    fn everything(platform: PlatformTag) -> Vec<&'static str> {
        Role::ALL
            .iter()
            .flat_map(|role| supported(platform, *role))
            .map(|id| id.name())
            .collect()
    }

    #[test]
    fn default_is_supported() {
        for platform in PLATFORMS {
            for role in Role::ALL {
                let default = default_for(platform, role);
                assert!(supported(platform, role).contains(&default));
            }
        }
    }

    #[test]
    fn platform_defaults() {
        assert_eq!(default_for(PlatformTag::Linux, Role::C), CompilerId::Gcc);
        assert_eq!(default_for(PlatformTag::MacOS, Role::C), CompilerId::Clang);
        assert_eq!(default_for(PlatformTag::MacOS, Role::Cxx), CompilerId::Clangxx);
        assert_eq!(default_for(PlatformTag::Windows, Role::Cxx), CompilerId::Cl);
        assert_eq!(default_for(PlatformTag::Other, Role::C), CompilerId::Gcc);
        assert_eq!(default_for(PlatformTag::Other, Role::Cxx), CompilerId::Gxx);
        assert_eq!(default_for(PlatformTag::Other, Role::Fortran), CompilerId::Gfortran);
    }

    #[test]
    fn listed_and_present_validates() {
        for platform in PLATFORMS {
            let present = everything(platform);
            for role in Role::ALL {
                for id in supported(platform, role) {
                    let found = validate(id.name(), platform, role, present.as_slice()).unwrap();
                    assert_eq!(found.name(), id.name());
                }
            }
        }
    }

    #[test]
    fn listed_but_missing_is_not_found() {
        let present: &[&str] = &["g++"];
        let err = validate("gcc", PlatformTag::Linux, Role::C, present).unwrap_err();
        let ToolchainError::UnsupportedCompiler { role, name, reason } = &err;
        assert_eq!(*role, Role::C);
        assert_eq!(name, "gcc");
        assert_eq!(*reason, UnsupportedReason::NotFound);
        assert_eq!(err.to_string(), "unsupported C compiler: gcc (not found in PATH)");
    }

    #[test]
    fn unlisted_is_rejected_even_when_present() {
        let present: &[&str] = &["tcc"];
        let err = validate("tcc", PlatformTag::Linux, Role::C, present).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported C compiler: tcc (not supported on Linux)"
        );
        let err = validate("icc", PlatformTag::MacOS, Role::C, &["icc"][..]).unwrap_err();
        assert!(matches!(
            err,
            ToolchainError::UnsupportedCompiler {
                reason: UnsupportedReason::NotSupported(PlatformTag::MacOS),
                ..
            }
        ));
    }

    #[test]
    fn flag_order_and_build_type() {
        let opt = resolve(CompilerId::Gcc, Role::C, BuildType::Optimize);
        assert_eq!(opt.flags(), "-ansi -pedantic -Wall -Wextra -Wshadow -O3");

        let dbg = resolve(CompilerId::Gcc, Role::C, BuildType::Debug);
        assert_eq!(dbg.flags(), "-ansi -pedantic -Wall -Wextra -Wshadow -g");

        let prof = resolve(CompilerId::Gxx, Role::Cxx, BuildType::Profile);
        assert_eq!(prof.flags(), "-pedantic -std=c++11 -Wall -Wextra -Wshadow -O2 -pg");
    }

    #[test]
    fn profile_wins_over_debug() {
        for id in [CompilerId::Gcc, CompilerId::Icl, CompilerId::Gfortran] {
            let both = resolve(id, Role::C, BuildType::from_flags(true, true));
            let profile = resolve(id, Role::C, BuildType::from_flags(false, true));
            assert_eq!(both, profile);
        }
    }

    #[test]
    fn empty_parts_are_skipped() {
        let pathf95 = resolve(CompilerId::Pathf95, Role::Fortran, BuildType::Optimize);
        assert_eq!(pathf95.flags(), "-Wall -Ofast");

        // cl has no profiling flag.
        let cl = resolve(CompilerId::Cl, Role::Cxx, BuildType::Profile);
        assert_eq!(
            cl.flags(),
            "/nologo /EHsc /Za /D_SCL_SECURE_NO_WARNINGS /D_CRT_SECURE_NO_WARNINGS"
        );
    }

    #[test]
    fn flags_never_empty() {
        for platform in PLATFORMS {
            for role in Role::ALL {
                for id in supported(platform, role) {
                    for build in [BuildType::Debug, BuildType::Profile, BuildType::Optimize] {
                        assert!(!resolve(*id, role, build).flags().is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn select_on_windows_reports_ifort() {
        let fc = select(
            "ifort",
            PlatformTag::Windows,
            Role::Fortran,
            BuildType::Debug,
            &["ifort"][..],
        )
        .unwrap();
        assert_eq!(fc.id(), CompilerId::IfortWindows);
        assert_eq!(fc.name(), "ifort");
        assert_eq!(fc.flags(), "/stand:f95 /Qdiag-disable:7416 /warn:all /Zi /debug:all");
        assert_eq!(fc.modflag(), "/module:");
        assert_eq!(fc.libexe(), "");
    }
}
