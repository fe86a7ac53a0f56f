//! JSON output helpers
//!
//! Every command emits one JSON document per line on stdout.

use serde::Serialize;
use std::io::{self, Write};

/// Write `value` as one line of JSON
pub fn write_line(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    let json =
        serde_json::to_string(value).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")
}

/// Emit `value` as one line of JSON on stdout
pub fn emit(value: &impl Serialize) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_line(&mut out, value)?;
    out.flush()
}
