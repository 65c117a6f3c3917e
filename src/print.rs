//! Console output helpers. Everything goes to standard output.

use crate::files::Properties;
use std::fmt::Display;
use std::io::{self, Write};

// Write failures on a closed stdout are ignored by every helper here.

/// Print `value` without a trailing newline.
pub fn log(value: impl Display) {
    let _ = write!(io::stdout().lock(), "{}", value);
}

/// Print `value` followed by a newline.
pub fn logln(value: impl Display) {
    let _ = writeln!(io::stdout().lock(), "{}", value);
}

/// Print every entry as `key: value`, one per line.
pub fn print_properties(props: &Properties) {
    let _ = write_properties_listing(&mut io::stdout().lock(), props);
}

/// Write every entry as `key: value`, one per line, to `out`.
pub fn write_properties_listing<W: Write>(out: &mut W, props: &Properties) -> io::Result<()> {
    for (key, value) in props {
        writeln!(out, "{}: {}", key, value)?;
    }
    out.flush()
}
