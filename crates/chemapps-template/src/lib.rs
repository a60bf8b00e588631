//! Makefile generation from `Makefile.unix` / `Makefile.win` templates.
//!
//! [`discover`] collects the templates below a search root, [`Substitutions`]
//! holds the value of every `@name@` placeholder for a run, and [`render`]
//! writes the `Makefile` next to each template.

pub mod discover;
pub mod engine;
pub mod error;
pub mod placeholder;
pub mod substitution;

pub use discover::discover;
pub use engine::{output_path, render, render_all, render_bytes, render_line, render_str, OUTPUT_NAME};
pub use error::{Result, TemplateError};
pub use placeholder::Placeholder;
pub use substitution::{InstallDirs, Substitutions, Toolchain};
