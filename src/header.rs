//! C header emission for packed bitmasks.
//!
//! Symbols are derived from one identifier: `FOO_H` guard, `FOO_WIDTH` and
//! `FOO_HEIGHT` macros, and a `const uint8_t foo[]` array with one image row
//! per line.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use crate::image::ConstImage;

const FALLBACK_IDENTIFIER: &str = "bitmask";

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderNames {
    pub guard: String,
    pub width_macro: String,
    pub height_macro: String,
    pub array: String,
}

impl HeaderNames {
    pub fn new(identifier: &str) -> Self {
        let prefix = identifier.to_ascii_uppercase();
        HeaderNames {
            guard: format!("{}_H", prefix),
            width_macro: format!("{}_WIDTH", prefix),
            height_macro: format!("{}_HEIGHT", prefix),
            array: identifier.to_ascii_lowercase(),
        }
    }

    pub fn from_path(path: &Path) -> Self {
        Self::new(&identifier_from_path(path))
    }
}

/// Turns a file stem into a valid C identifier.
pub fn identifier_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut ident: String = stem
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.is_empty() {
        ident = FALLBACK_IDENTIFIER.to_owned();
    } else if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Renders the whole header. `WIDTH` is the padded width, i.e. bytes per row times 8.
pub fn render_header<T: ConstImage + ?Sized>(names: &HeaderNames, bitmask: &T) -> String {
    let mut out = String::new();
    write_header_fmt(&mut out, names, bitmask).expect("formatting into a String");
    out
}

fn write_header_fmt<T: ConstImage + ?Sized>(
    out: &mut String,
    names: &HeaderNames,
    bitmask: &T,
) -> std::fmt::Result {
    writeln!(out, "#ifndef {}", names.guard)?;
    writeln!(out, "#define {}", names.guard)?;
    writeln!(out, "#define {} {}", names.width_macro, bitmask.pitch() * 8)?;
    writeln!(out, "#define {} {}", names.height_macro, bitmask.height())?;
    writeln!(out, "const uint8_t {}[] = {{", names.array)?;
    for row in bitmask.rows() {
        out.push(' ');
        for byte in row {
            write!(out, " 0x{:02X},", byte)?;
        }
        out.push('\n');
    }
    writeln!(out, "}};")?;
    writeln!(out, "#endif // {}", names.guard)
}

pub fn write_header<W: Write, T: ConstImage + ?Sized>(
    w: &mut W,
    names: &HeaderNames,
    bitmask: &T,
) -> std::io::Result<()> {
    w.write_all(render_header(names, bitmask).as_bytes())?;
    w.flush()
}
