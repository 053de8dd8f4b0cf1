//! Stdout writers.
//!
//! Invariants:
//! - Results go to stdout only; diagnostics and logs go to stderr.
//! - Each NDJSON line is one complete JSON value.
//! - The stdout lock is never held across an `.await`.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

/// Append items to `out` as NDJSON.
pub fn write_ndjson<W, I, T>(out: &mut W, items: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    for item in items {
        serde_json::to_writer(&mut *out, &item)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Print items to stdout as NDJSON and flush.
pub fn print_ndjson<I, T>(items: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Serialize,
{
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    write_ndjson(&mut lock, items)?;
    lock.flush()?;
    Ok(())
}

/// Print one value to stdout as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
