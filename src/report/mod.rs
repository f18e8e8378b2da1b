//! Tabular result persistence.
//!
//! Appends one row per completed iteration or restart to a CSV file whose
//! first row is a fixed header. The sink is an append-only adapter; it makes
//! no algorithmic decisions and is never invoked for a failed run.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Column header written once per output target.
pub const CSV_HEADER: &str = "algorithm,problem,dimension,iteration,fitness,time_ms";

/// One result row.
#[derive(Debug, Clone)]
pub struct ResultRow<'a> {
    /// Algorithm name, e.g. `RepeatedLocalSearch`.
    pub algorithm: &'a str,
    /// Problem short name, e.g. `DeJong1`.
    pub problem: &'a str,
    /// Solution vector dimension.
    pub dimension: usize,
    /// Iteration or restart index, 0-based.
    pub iteration: usize,
    /// Recorded fitness value.
    pub fitness: f64,
    /// Elapsed wall time of the whole run, in milliseconds.
    pub time_ms: f64,
}

/// Buffered CSV sink.
///
/// Creating the sink truncates any existing file and writes the header.
pub struct CsvSink {
    writer: BufWriter<File>,
}

impl CsvSink {
    /// Creates the output file and writes the header row.
    pub fn create(path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writeln!(writer, "{CSV_HEADER}")?;
        Ok(Self { writer })
    }

    /// Appends one result row.
    pub fn append(&mut self, row: &ResultRow<'_>) -> io::Result<()> {
        writeln!(
            self.writer,
            "{},{},{},{},{},{:.6}",
            row.algorithm, row.problem, row.dimension, row.iteration, row.fitness, row.time_ms
        )
    }

    /// Flushes buffered rows to disk.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("stochbench-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_header_written_once() {
        let path = scratch_path("header.csv");
        {
            let mut sink = CsvSink::create(&path).unwrap();
            sink.flush().unwrap();
        }
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, format!("{CSV_HEADER}\n"));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_rows_append_in_order() {
        let path = scratch_path("rows.csv");
        {
            let mut sink = CsvSink::create(&path).unwrap();
            for i in 0..3 {
                sink.append(&ResultRow {
                    algorithm: "Blind",
                    problem: "DeJong1",
                    dimension: 10,
                    iteration: i,
                    fitness: 1.5 * i as f64,
                    time_ms: 12.5,
                })
                .unwrap();
            }
            sink.flush().unwrap();
        }

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines[1], "Blind,DeJong1,10,0,0,12.500000");
        assert_eq!(lines[2], "Blind,DeJong1,10,1,1.5,12.500000");
        assert_eq!(lines[3], "Blind,DeJong1,10,2,3,12.500000");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_create_truncates_existing_file() {
        let path = scratch_path("truncate.csv");
        std::fs::write(&path, "stale contents\n").unwrap();
        {
            let mut sink = CsvSink::create(&path).unwrap();
            sink.flush().unwrap();
        }
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale"));
        assert!(text.starts_with(CSV_HEADER));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_create_fails_for_missing_directory() {
        let path = std::env::temp_dir()
            .join("stochbench-nonexistent-dir")
            .join("out.csv");
        assert!(CsvSink::create(&path).is_err());
    }
}
