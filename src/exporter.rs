//! File handling around the transformer.
//!
//! An export run prepares the directory layout, reads the input file, hands
//! its lines to [`transform`], writes the result and backs both files up.
//! Every filesystem failure is returned as an [`ExportError`] so the caller
//! can report it; nothing here panics on I/O.

use crate::error::{ExportError, Result};
use crate::layout::Layout;
use crate::transformer::transform;
use log::{debug, info};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Byte order mark some editors put at the start of UTF-8 files.
const BOM: char = '\u{feff}';

/// Counts from a successful export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Customer lines read (input lines after the header).
    pub customers: usize,

    /// Lines written to the output file.
    pub lines_written: usize,
}

/// Runs one export over `layout`.
///
/// Missing and empty input files are reported as errors without touching the
/// output or backup files.
pub fn run(layout: &Layout) -> Result<ExportSummary> {
    prepare_directories(layout)?;

    let input = layout.input_file();
    if !input.is_file() {
        return Err(ExportError::InputMissing { path: input });
    }

    let lines = read_lines(&input)?;
    if lines.is_empty() {
        return Err(ExportError::InputEmpty { path: input });
    }
    debug!("Read {} lines from {}", lines.len(), input.display());

    let output = transform(&lines);
    let output_path = layout.output_file();
    write_lines(&output_path, &output)?;
    info!("Wrote {} lines to {}", output.len(), output_path.display());

    back_up(&input, &layout.input_backup(), "back up input")?;
    back_up(&output_path, &layout.output_backup(), "back up output")?;

    Ok(ExportSummary {
        customers: lines.len() - 1,
        lines_written: output.len(),
    })
}

/// Creates the incoming, outgoing and backup directories if they are missing.
pub fn prepare_directories(layout: &Layout) -> Result<()> {
    for dir in layout.directories() {
        fs::create_dir_all(&dir).map_err(ExportError::io("create directory", &dir))?;
    }
    Ok(())
}

/// Reads a whole file as lines, accepting `\r\n`, `\n` and lone `\r` endings.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// failing the read. A trailing line ending does not produce an extra empty
/// line, so an empty file yields no lines at all.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(ExportError::io("read input", path))?;
    let content = String::from_utf8_lossy(&bytes);
    let content = content.strip_prefix(BOM).unwrap_or(&*content);
    Ok(split_lines(content))
}

fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(pos) => {
                lines.push(rest[..pos].to_owned());
                let ending = &rest[pos..];
                rest = ending.strip_prefix("\r\n").unwrap_or(&ending[1..]);
            }
            None => {
                lines.push(rest.to_owned());
                break;
            }
        }
    }

    lines
}

/// Writes every line followed by `\n`, replacing any existing file.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let file = File::create(path).map_err(ExportError::io("write output", path))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref()).map_err(ExportError::io("write output", path))?;
    }
    writer.flush().map_err(ExportError::io("write output", path))
}

fn back_up(source: &Path, target: &Path, action: &'static str) -> Result<()> {
    fs::copy(source, target).map_err(ExportError::io(action, target))?;
    debug!("Copied {} to {}", source.display(), target.display());
    Ok(())
}
