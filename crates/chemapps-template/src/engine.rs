//! Line-by-line placeholder substitution.
//!
//! Each line is checked against the placeholders in priority order and the
//! first one found is replaced (every occurrence of that one token). A
//! second, different token on the same line is left as is; templates are
//! expected to carry at most one token per line.
//!
//! Templates are processed as bytes; lines that are not valid UTF-8 (a
//! Latin-1 comment, say) are copied through with only the token replaced.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::error::{Result, TemplateError};
use crate::placeholder::Placeholder;
use crate::substitution::Substitutions;

/// Name of the file written next to each template.
pub const OUTPUT_NAME: &str = "Makefile";

/// Substitute the first matching placeholder in `line`.
pub fn render_line<'a>(line: &'a str, subs: &Substitutions) -> Cow<'a, str> {
    if !line.contains('@') {
        return Cow::Borrowed(line);
    }
    for placeholder in Placeholder::ALL {
        let token = placeholder.token();
        if line.contains(&token) {
            return Cow::Owned(line.replace(&token, subs.get(placeholder)));
        }
    }
    Cow::Borrowed(line)
}

/// Render a whole template text. Line endings are kept as they are.
pub fn render_str(text: &str, subs: &Substitutions) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        out.push_str(&render_line(line, subs));
    }
    out
}

/// Render template bytes. Bytes outside the substituted token are kept.
pub fn render_bytes(text: &[u8], subs: &Substitutions) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for line in text.split_inclusive(|b| *b == b'\n') {
        match std::str::from_utf8(line) {
            Ok(line) => out.extend_from_slice(render_line(line, subs).as_bytes()),
            Err(_) => render_raw_line(line, subs, &mut out),
        }
    }
    out
}

/// Byte-level counterpart of [`render_line`].
fn render_raw_line(line: &[u8], subs: &Substitutions, out: &mut Vec<u8>) {
    let found = Placeholder::ALL.into_iter().find_map(|p| {
        let token = p.token();
        find_bytes(line, token.as_bytes()).map(|_| (p, token))
    });
    let Some((placeholder, token)) = found else {
        out.extend_from_slice(line);
        return;
    };
    let token = token.as_bytes();
    let value = subs.get(placeholder).as_bytes();
    let mut rest = line;
    while let Some(at) = find_bytes(rest, token) {
        out.extend_from_slice(&rest[..at]);
        out.extend_from_slice(value);
        rest = &rest[at + token.len()..];
    }
    out.extend_from_slice(rest);
}

fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Path of the Makefile generated from `template`.
pub fn output_path(template: &Path) -> PathBuf {
    template
        .parent()
        .map(|dir| dir.join(OUTPUT_NAME))
        .unwrap_or_else(|| PathBuf::from(OUTPUT_NAME))
}

/// Render `template` into a `Makefile` in the same directory, replacing any
/// existing one. Returns the path written.
pub fn render(template: &Path, subs: &Substitutions) -> Result<PathBuf> {
    let text = std::fs::read(template).map_err(|source| TemplateError::Io {
        path: template.to_path_buf(),
        source,
    })?;
    let rendered = render_bytes(&text, subs);

    let output = output_path(template);
    std::fs::write(&output, rendered).map_err(|source| TemplateError::Io {
        path: output.clone(),
        source,
    })?;
    tracing::debug!(template = %template.display(), output = %output.display(), "rendered template");
    Ok(output)
}

/// Render every template in order, stopping at the first failure.
pub fn render_all(templates: &[PathBuf], subs: &Substitutions) -> Result<Vec<PathBuf>> {
    templates.iter().map(|t| render(t, subs)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subs() -> Substitutions {
        Substitutions::from_pairs([
            (Placeholder::Prefix, "/opt/chem"),
            (Placeholder::Cc, "gcc"),
            (Placeholder::CcFlags, "-ansi -O3"),
            (Placeholder::ExeExt, ".exe"),
        ])
    }

    #[test]
    fn text_without_tokens_is_unchanged() {
        let text = "all:\n\t$(CC) -o main main.c\n# email me@example.org\r\nlast line";
        assert_eq!(render_str(text, &subs()), text);
    }

    #[test]
    fn cc_token_replaced_in_place() {
        let line = "CC = @cc@  # C compiler\n";
        assert_eq!(render_line(line, &subs()), "CC = gcc  # C compiler\n");
    }

    #[test]
    fn repeated_token_replaced_everywhere() {
        let line = "PROGS = main@exeext@ test@exeext@\n";
        assert_eq!(render_line(line, &subs()), "PROGS = main.exe test.exe\n");
    }

    #[test]
    fn only_first_token_in_priority_order() {
        // @prefix@ outranks @cc@; the second token survives untouched.
        let line = "X = @cc@ @prefix@\n";
        assert_eq!(render_line(line, &subs()), "X = @cc@ /opt/chem\n");
    }

    #[test]
    fn unknown_token_left_alone() {
        let line = "LINK = @linkexe@\n";
        assert_eq!(render_line(line, &subs()), line);
    }

    #[test]
    fn render_writes_sibling_makefile() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("Makefile.unix");
        std::fs::write(&template, "CC = @cc@\nCFLAGS = @ccflags@\n").unwrap();
        std::fs::write(dir.path().join("Makefile"), "stale content that is longer\n").unwrap();

        let out = render(&template, &subs()).unwrap();
        assert_eq!(out, dir.path().join("Makefile"));
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "CC = gcc\nCFLAGS = -ansi -O3\n"
        );
        // Template itself is untouched.
        assert_eq!(
            std::fs::read_to_string(&template).unwrap(),
            "CC = @cc@\nCFLAGS = @ccflags@\n"
        );
    }

    #[test]
    fn latin1_bytes_survive_rendering() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("Makefile.unix");
        let mut text = b"# Sellev\xe5g @cc@ build\n".to_vec();
        text.extend_from_slice(b"CC = @cc@\n# caf\xe9\n");
        std::fs::write(&template, &text).unwrap();

        let out = render(&template, &subs()).unwrap();
        assert_eq!(
            std::fs::read(&out).unwrap(),
            b"# Sellev\xe5g gcc build\nCC = gcc\n# caf\xe9\n".to_vec()
        );
    }

    #[test]
    fn raw_line_keeps_first_token_rule() {
        let mut out = Vec::new();
        render_raw_line(b"\xff @cc@ @prefix@ @prefix@", &subs(), &mut out);
        assert_eq!(out, b"\xff @cc@ /opt/chem /opt/chem".to_vec());
    }

    #[test]
    fn missing_template_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = render(&dir.path().join("Makefile.unix"), &subs()).unwrap_err();
        assert!(matches!(err, TemplateError::Io { .. }));
    }
}
