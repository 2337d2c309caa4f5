use crate::model::ResultRecord;
use std::io::{self, Write};

/// Write one tab-separated line per record: mail, display name, title.
///
/// Empty fields print as empty strings so the columns keep their meaning;
/// zero records writes nothing at all.
pub fn write_results<W: Write>(out: &mut W, results: &[ResultRecord]) -> io::Result<()> {
    for record in results {
        writeln!(out, "{}\t{}\t{}", record.mail, record.name, record.title)?;
    }
    Ok(())
}
