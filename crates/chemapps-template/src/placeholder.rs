//! The fixed placeholder vocabulary of Makefile templates.

use std::fmt;

use chemapps_toolchain::Role;

/// A `@name@` marker recognised in templates.
///
/// Variants are declared in priority order: when a line holds several
/// markers, only the first one in this order is substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    Prefix,
    Cc,
    CcFlags,
    CcDepflag,
    CcSharedFlag,
    CcSharedLdflag,
    CcLibexe,
    Cxx,
    CxxFlags,
    CxxDepflag,
    CxxSharedFlag,
    CxxSharedLdflag,
    CxxLibexe,
    Fc,
    FcFlags,
    FcDepflag,
    FcModflag,
    FcSharedFlag,
    FcSharedLdflag,
    Defs,
    CppFlags,
    LdFlags,
    ExeExt,
}

impl Placeholder {
    /// Every placeholder, in priority order.
    pub const ALL: [Placeholder; 23] = [
        Self::Prefix,
        Self::Cc,
        Self::CcFlags,
        Self::CcDepflag,
        Self::CcSharedFlag,
        Self::CcSharedLdflag,
        Self::CcLibexe,
        Self::Cxx,
        Self::CxxFlags,
        Self::CxxDepflag,
        Self::CxxSharedFlag,
        Self::CxxSharedLdflag,
        Self::CxxLibexe,
        Self::Fc,
        Self::FcFlags,
        Self::FcDepflag,
        Self::FcModflag,
        Self::FcSharedFlag,
        Self::FcSharedLdflag,
        Self::Defs,
        Self::CppFlags,
        Self::LdFlags,
        Self::ExeExt,
    ];

    /// Bare name, as it appears between the `@` signs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Prefix => "prefix",
            Self::Cc => "cc",
            Self::CcFlags => "ccflags",
            Self::CcDepflag => "cc_depflag",
            Self::CcSharedFlag => "cc_shared_flag",
            Self::CcSharedLdflag => "cc_shared_ldflag",
            Self::CcLibexe => "cc_libexe",
            Self::Cxx => "cxx",
            Self::CxxFlags => "cxxflags",
            Self::CxxDepflag => "cxx_depflag",
            Self::CxxSharedFlag => "cxx_shared_flag",
            Self::CxxSharedLdflag => "cxx_shared_ldflag",
            Self::CxxLibexe => "cxx_libexe",
            Self::Fc => "fc",
            Self::FcFlags => "fcflags",
            Self::FcDepflag => "fc_depflag",
            Self::FcModflag => "fc_modflag",
            Self::FcSharedFlag => "fc_shared_flag",
            Self::FcSharedLdflag => "fc_shared_ldflag",
            Self::Defs => "defs",
            Self::CppFlags => "cppflags",
            Self::LdFlags => "ldflags",
            Self::ExeExt => "exeext",
        }
    }

    /// The marker as written in a template, e.g. `@cc@`.
    pub fn token(self) -> String {
        format!("@{}@", self.name())
    }

    /// Parse a bare name.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The compiler role a placeholder belongs to, if any.
    pub fn role(self) -> Option<Role> {
        match self {
            Self::Cc
            | Self::CcFlags
            | Self::CcDepflag
            | Self::CcSharedFlag
            | Self::CcSharedLdflag
            | Self::CcLibexe => Some(Role::C),
            Self::Cxx
            | Self::CxxFlags
            | Self::CxxDepflag
            | Self::CxxSharedFlag
            | Self::CxxSharedLdflag
            | Self::CxxLibexe => Some(Role::Cxx),
            Self::Fc
            | Self::FcFlags
            | Self::FcDepflag
            | Self::FcModflag
            | Self::FcSharedFlag
            | Self::FcSharedLdflag => Some(Role::Fortran),
            Self::Prefix | Self::Defs | Self::CppFlags | Self::LdFlags | Self::ExeExt => None,
        }
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}@", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_and_parse_back() {
        for p in Placeholder::ALL {
            assert_eq!(Placeholder::parse(p.name()), Some(p));
        }
        assert_eq!(Placeholder::parse("linkexe"), None);
    }

    #[test]
    fn all_is_in_declaration_order() {
        let mut sorted = Placeholder::ALL;
        sorted.sort();
        assert_eq!(sorted, Placeholder::ALL);
    }

    #[test]
    fn tokens() {
        assert_eq!(Placeholder::Cc.token(), "@cc@");
        assert_eq!(Placeholder::FcModflag.token(), "@fc_modflag@");
        assert_eq!(Placeholder::ExeExt.to_string(), "@exeext@");
    }

    #[test]
    fn role_prefix_matches_name() {
        for p in Placeholder::ALL {
            if let Some(role) = p.role() {
                assert!(p.name().starts_with(role.key()), "{p} vs {role}");
            }
        }
        // `@cc@` must not be found inside `@ccflags@`.
        assert!(!Placeholder::CcFlags.token().contains(&Placeholder::Cc.token()));
    }
}
