//! Compiler identities and their flag profiles.
//!
//! The registry is static data: every compiler the configure tool knows is a
//! [`CompilerId`] variant, and each variant maps to exactly one
//! [`FlagProfile`]. Which compilers are offered on a platform is decided by
//! [`supported`].

use std::fmt;

use serde::Serialize;

use crate::platform::PlatformTag;

/// The three languages a Makefile can be configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C++")]
    Cxx,
    #[serde(rename = "Fortran")]
    Fortran,
}

impl Role {
    /// All roles, in configuration order.
    pub const ALL: [Role; 3] = [Role::C, Role::Cxx, Role::Fortran];

    /// Prefix used by this role's template placeholders (`cc`, `cxx`, `fc`).
    pub fn key(self) -> &'static str {
        match self {
            Self::C => "cc",
            Self::Cxx => "cxx",
            Self::Fortran => "fc",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::C => write!(f, "C"),
            Self::Cxx => write!(f, "C++"),
            Self::Fortran => write!(f, "Fortran"),
        }
    }
}

/// Debug, profile and optimize are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    Debug,
    Profile,
    #[default]
    Optimize,
}

impl BuildType {
    /// Combine the user's debug/profile requests. Profiling wins when both
    /// are given.
    pub fn from_flags(debug: bool, profile: bool) -> Self {
        if profile {
            Self::Profile
        } else if debug {
            Self::Debug
        } else {
            Self::Optimize
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Profile => write!(f, "profile"),
            Self::Optimize => write!(f, "optimize"),
        }
    }
}

/// Flags associated with one compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlagProfile {
    /// Flag emitting make dependency rules.
    pub depflag: &'static str,
    /// Language standard flags.
    pub langflag: &'static str,
    pub warnflag: &'static str,
    pub debugflag: &'static str,
    pub profileflag: &'static str,
    pub optflag: &'static str,
    /// Position independent code.
    pub shared_flag: &'static str,
    /// Linker flag producing a shared library.
    pub shared_ldflag: &'static str,
    /// Fortran module output directory flag; empty for C and C++.
    pub modflag: &'static str,
    /// Archiver used to build static libraries, where the compiler needs a
    /// specific one.
    pub libexe: Option<&'static str>,
}

impl FlagProfile {
    /// The build-type dependent flag.
    pub fn build_flag(&self, build: BuildType) -> &'static str {
        match build {
            BuildType::Debug => self.debugflag,
            BuildType::Profile => self.profileflag,
            BuildType::Optimize => self.optflag,
        }
    }
}

const GCC: FlagProfile = FlagProfile {
    depflag: "-MM",
    langflag: "-ansi -pedantic",
    warnflag: "-Wall -Wextra -Wshadow",
    debugflag: "-g",
    profileflag: "-O2 -pg",
    optflag: "-O3",
    shared_flag: "-fPIC",
    shared_ldflag: "-shared",
    modflag: "",
    libexe: None,
};

const ICC: FlagProfile = FlagProfile {
    langflag: "-strict-ansi",
    warnflag: "-Wall",
    optflag: "-O3 -ipo -no-prec-div -xHOST",
    ..GCC
};

const PATHCC: FlagProfile = FlagProfile {
    langflag: "-ansi",
    warnflag: "-Wall -Wno-uninitialized -Wshadow",
    debugflag: "-fullwarn -g",
    optflag: "-Ofast",
    ..GCC
};

// clang shares the gcc profile for C.
const CLANG: FlagProfile = GCC;

const GXX: FlagProfile = FlagProfile {
    langflag: "-pedantic -std=c++11",
    ..GCC
};

const ICPC: FlagProfile = ICC;

const PATHCXX: FlagProfile = FlagProfile {
    langflag: "-std=c++98",
    ..PATHCC
};

const OPENCXX: FlagProfile = FlagProfile {
    langflag: "-std=c++98 -pedantic-errors",
    warnflag: "-Wall -Wextra -Wno-uninitialized -Wshadow",
    debugflag: "-g",
    ..PATHCC
};

const CLANGXX: FlagProfile = FlagProfile {
    langflag: "-pedantic -std=c++11",
    warnflag: "-Wall",
    optflag: "-Ofast",
    ..GCC
};

const CL: FlagProfile = FlagProfile {
    depflag: "",
    langflag: "/nologo /EHsc /Za",
    warnflag: "/D_SCL_SECURE_NO_WARNINGS /D_CRT_SECURE_NO_WARNINGS",
    debugflag: "/Zi",
    profileflag: "",
    optflag: "/O2",
    shared_flag: "",
    shared_ldflag: "",
    modflag: "",
    libexe: Some("lib"),
};

const ICL: FlagProfile = FlagProfile {
    warnflag: "/W3 /D_SCL_SECURE_NO_WARNINGS /D_CRT_SECURE_NO_WARNINGS",
    debugflag: "/Zi /debug:all",
    profileflag: "/Qprof-gen",
    optflag: "/fast",
    libexe: Some("xilib"),
    ..CL
};

const GFORTRAN: FlagProfile = FlagProfile {
    depflag: "",
    langflag: "-std=f95 -fall-intrinsics -fdefault-integer-8",
    warnflag: "-Wall -Wextra",
    debugflag: "-g",
    profileflag: "-pg",
    optflag: "-O3",
    shared_flag: "-fPIC",
    shared_ldflag: "-shared",
    modflag: "-J",
    libexe: None,
};

const IFORT: FlagProfile = FlagProfile {
    langflag: "-std95 -diag-disable 7416 -i8",
    warnflag: "-warn",
    optflag: "-O3 -ipo -no-prec-div -xHOST",
    modflag: "-module ",
    ..GFORTRAN
};

const IFORT_WINDOWS: FlagProfile = FlagProfile {
    depflag: "",
    langflag: "/stand:f95 /Qdiag-disable:7416",
    warnflag: "/warn:all",
    debugflag: "/Zi /debug:all",
    profileflag: "/Qprof-gen",
    optflag: "/fast",
    shared_flag: "",
    shared_ldflag: "",
    modflag: "/module:",
    libexe: None,
};

const PATHF95: FlagProfile = FlagProfile {
    langflag: "",
    warnflag: "-Wall",
    optflag: "-Ofast",
    modflag: "-module ",
    ..GFORTRAN
};

/// Every compiler the registry knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompilerId {
    Gcc,
    Icc,
    PathCc,
    OpenCc,
    Clang,
    /// Microsoft Visual C/C++; serves both C and C++.
    Cl,
    /// Intel C/C++ for Windows; serves both C and C++.
    Icl,
    Gxx,
    Icpc,
    PathCxx,
    OpenCxx,
    Clangxx,
    Gfortran,
    Ifort,
    /// Intel Fortran on Windows. Reported to the user as `ifort`.
    IfortWindows,
    Pathf95,
    Openf95,
}

impl CompilerId {
    /// Executable name as the user writes it.
    pub fn name(self) -> &'static str {
        match self {
            Self::Gcc => "gcc",
            Self::Icc => "icc",
            Self::PathCc => "pathcc",
            Self::OpenCc => "opencc",
            Self::Clang => "clang",
            Self::Cl => "cl",
            Self::Icl => "icl",
            Self::Gxx => "g++",
            Self::Icpc => "icpc",
            Self::PathCxx => "pathCC",
            Self::OpenCxx => "openCC",
            Self::Clangxx => "clang++",
            Self::Gfortran => "gfortran",
            Self::Ifort | Self::IfortWindows => "ifort",
            Self::Pathf95 => "pathf95",
            Self::Openf95 => "openf95",
        }
    }

    /// The flag profile of this compiler.
    pub fn profile(self) -> &'static FlagProfile {
        match self {
            Self::Gcc => &GCC,
            Self::Icc => &ICC,
            Self::PathCc | Self::OpenCc => &PATHCC,
            Self::Clang => &CLANG,
            Self::Cl => &CL,
            Self::Icl => &ICL,
            Self::Gxx => &GXX,
            Self::Icpc => &ICPC,
            Self::PathCxx => &PATHCXX,
            Self::OpenCxx => &OPENCXX,
            Self::Clangxx => &CLANGXX,
            Self::Gfortran => &GFORTRAN,
            Self::Ifort => &IFORT,
            Self::IfortWindows => &IFORT_WINDOWS,
            Self::Pathf95 | Self::Openf95 => &PATHF95,
        }
    }

    /// Find the compiler called `name` among those supported for `role` on
    /// `platform`. On Windows `ifort` resolves to [`CompilerId::IfortWindows`].
    pub fn lookup(name: &str, platform: PlatformTag, role: Role) -> Option<Self> {
        supported(platform, role)
            .iter()
            .copied()
            .find(|id| id.name() == name)
    }
}

impl fmt::Display for CompilerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compilers offered for `role` on `platform`. The first entry is the
/// platform default.
pub fn supported(platform: PlatformTag, role: Role) -> &'static [CompilerId] {
    use CompilerId::*;

    match (platform, role) {
        (PlatformTag::Linux, Role::C) => &[Gcc, Icc, PathCc, OpenCc],
        (PlatformTag::Linux, Role::Cxx) => &[Gxx, Icpc, PathCxx, OpenCxx],
        (PlatformTag::Linux, Role::Fortran) => &[Gfortran, Ifort, Pathf95, Openf95],
        (PlatformTag::Cygwin, Role::C) => &[Gcc],
        (PlatformTag::Cygwin, Role::Cxx) => &[Gxx],
        (PlatformTag::Cygwin, Role::Fortran) => &[Gfortran],
        (PlatformTag::Windows, Role::C | Role::Cxx) => &[Cl, Icl],
        (PlatformTag::Windows, Role::Fortran) => &[IfortWindows],
        (PlatformTag::MacOS, Role::C) => &[Clang, Gcc],
        (PlatformTag::MacOS, Role::Cxx) => &[Clangxx, Gxx],
        (PlatformTag::MacOS, Role::Fortran) => &[Gfortran],
        (PlatformTag::Other, Role::C) => &[Gcc],
        (PlatformTag::Other, Role::Cxx) => &[Gxx],
        (PlatformTag::Other, Role::Fortran) => &[Gfortran],
    }
}
