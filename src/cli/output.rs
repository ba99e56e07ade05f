/// Output formatting: indented or single-line JSON, saving, error messages.
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use serde_json::Value;

use crate::errors::AppError;

/// How a response is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented JSON, two spaces.
    #[default]
    Json,
    /// Single-line JSON with `", "` and `": "` separators.
    Compact,
}

impl OutputFormat {
    /// `--raw` selects compact output.
    #[must_use]
    pub fn from_raw_flag(raw: bool) -> Self {
        if raw { Self::Compact } else { Self::Json }
    }
}

/// Output context for a run.
pub struct OutputCtx<'a> {
    pub format: OutputFormat,
    /// Where to save the indented response, if anywhere.
    pub save_path: Option<&'a Path>,
}

impl<'a> OutputCtx<'a> {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(raw: bool, save_path: Option<&'a Path>) -> Self {
        Self {
            format: OutputFormat::from_raw_flag(raw),
            save_path,
        }
    }
}

/// Single-line formatter that puts a space after `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn to_string_with<F: Formatter>(value: &Value, formatter: F) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever writes UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render `value` without a trailing newline.
///
/// # Errors
///
/// Propagates serializer failures; a `Value` built from JSON never triggers one.
pub fn render(value: &Value, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => to_string_with(value, PrettyFormatter::with_indent(b"  ")),
        OutputFormat::Compact => to_string_with(value, SpacedFormatter),
    }
}

/// Write the response to stdout, then save it if asked. Save failures are
/// reported on stderr and do not fail the run.
pub fn write_response(value: &Value, ctx: &OutputCtx<'_>) {
    match render(value, ctx.format) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }

    if let Some(path) = ctx.save_path {
        match save_response(value, path) {
            Ok(()) => eprintln!("Output saved to {}", path.display()),
            Err(e) => eprintln!("Failed to save output: {e}"),
        }
    }
}

/// Write the indented response plus a newline to `path`, the same bytes the
/// default stdout output shows.
///
/// # Errors
///
/// Returns the I/O error if the file cannot be written.
pub fn save_response(value: &Value, path: &Path) -> io::Result<()> {
    let mut rendered = render(value, OutputFormat::Json).map_err(io::Error::other)?;
    rendered.push('\n');
    std::fs::write(path, rendered)
}

/// Write an error to stderr.
pub fn write_error(err: &AppError) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = writeln!(out, "Error: {err}");
}
