//! Placeholder values for one configuration run.

use std::collections::BTreeMap;

use chemapps_toolchain::{BuildType, PlatformTag, ResolvedCompiler, Role};

use crate::placeholder::Placeholder;

/// Installation directories written into the Makefiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallDirs {
    pub prefix: String,
    pub libdir: String,
    pub includedir: String,
}

/// The resolved compilers of a run, one per role.
#[derive(Debug, Clone)]
pub struct Toolchain {
    pub cc: ResolvedCompiler,
    pub cxx: ResolvedCompiler,
    pub fc: ResolvedCompiler,
}

impl Toolchain {
    pub fn get(&self, role: Role) -> &ResolvedCompiler {
        match role {
            Role::C => &self.cc,
            Role::Cxx => &self.cxx,
            Role::Fortran => &self.fc,
        }
    }
}

/// A value for every [`Placeholder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitutions {
    values: BTreeMap<Placeholder, String>,
}

impl Substitutions {
    /// Derive all values from the platform, install directories, build type
    /// and resolved compilers.
    pub fn new(
        platform: PlatformTag,
        dirs: &InstallDirs,
        build: BuildType,
        toolchain: &Toolchain,
    ) -> Self {
        let values = Placeholder::ALL
            .into_iter()
            .map(|p| {
                let value = match p {
                    Placeholder::Prefix => dirs.prefix.clone(),
                    Placeholder::Defs => platform.build_defines(build).to_string(),
                    Placeholder::CppFlags => platform.include_search_flag(&dirs.includedir),
                    Placeholder::LdFlags => platform.library_search_flag(&dirs.libdir),
                    Placeholder::ExeExt => platform.executable_suffix().to_string(),
                    p => p
                        .role()
                        .map(|role| compiler_value(p, toolchain.get(role)).to_string())
                        .unwrap_or_default(),
                };
                (p, value)
            })
            .collect();
        Self { values }
    }

    /// Build from explicit values; placeholders not given map to the empty
    /// string.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Placeholder, S)>,
        S: Into<String>,
    {
        let mut values: BTreeMap<Placeholder, String> = Placeholder::ALL
            .into_iter()
            .map(|p| (p, String::new()))
            .collect();
        for (p, v) in pairs {
            values.insert(p, v.into());
        }
        Self { values }
    }

    /// Value substituted for `placeholder`.
    pub fn get(&self, placeholder: Placeholder) -> &str {
        self.values.get(&placeholder).map(String::as_str).unwrap_or("")
    }
}

fn compiler_value(placeholder: Placeholder, compiler: &ResolvedCompiler) -> &str {
    match placeholder {
        Placeholder::Cc | Placeholder::Cxx | Placeholder::Fc => compiler.name(),
        Placeholder::CcFlags | Placeholder::CxxFlags | Placeholder::FcFlags => compiler.flags(),
        Placeholder::CcDepflag | Placeholder::CxxDepflag | Placeholder::FcDepflag => {
            compiler.depflag()
        }
        Placeholder::CcSharedFlag | Placeholder::CxxSharedFlag | Placeholder::FcSharedFlag => {
            compiler.shared_flag()
        }
        Placeholder::CcSharedLdflag
        | Placeholder::CxxSharedLdflag
        | Placeholder::FcSharedLdflag => compiler.shared_ldflag(),
        Placeholder::CcLibexe | Placeholder::CxxLibexe => compiler.libexe(),
        Placeholder::FcModflag => compiler.modflag(),
        _ => "",
    }
}
