//! `configure --list`: the compilers supported on this platform.

use anyhow::Result;
use chemapps_toolchain::{supported, PlatformTag, Role};
use serde::Serialize;

/// Supported compiler names per role. The first name is the default.
#[derive(Debug, Serialize)]
pub struct SupportedCompilers {
    pub platform: PlatformTag,
    pub cc: Vec<&'static str>,
    pub cxx: Vec<&'static str>,
    pub fc: Vec<&'static str>,
}

impl SupportedCompilers {
    pub fn for_platform(platform: PlatformTag) -> Self {
        let names = |role| -> Vec<&'static str> {
            supported(platform, role).iter().map(|id| id.name()).collect()
        };
        Self {
            platform,
            cc: names(Role::C),
            cxx: names(Role::Cxx),
            fc: names(Role::Fortran),
        }
    }
}

pub fn run(platform: PlatformTag, json: bool) -> Result<()> {
    let list = SupportedCompilers::for_platform(platform);
    if json {
        println!("{}", serde_json::to_string_pretty(&list)?);
        return Ok(());
    }
    println!("Supported compiler(s):");
    println!("C:        {}", list.cc.join(" "));
    println!("C++:      {}", list.cxx.join(" "));
    println!("Fortran:  {}", list.fc.join(" "));
    Ok(())
}
