use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use datalens_analyzer::Dataset;

/// Destination of a JSON result: stdout, or a file when a path is given.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    /// Pretty-prints `value` as JSON to `output_path`, or to stdout if `None`.
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = match output_path {
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Output::File {
                    writer: BufWriter::new(file),
                    path,
                }
            }
            None => Output::Stdout(io::stdout().lock()),
        };
        output.write_json(value)?;
        if let Output::File { path, .. } = &output {
            tracing::info!(path = %path.display(), "wrote output");
        }
        Ok(())
    }

    fn display_path(&self) -> String {
        match self {
            Output::Stdout(_) => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(self)
            .and_then(|()| self.flush())
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(writer) => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(writer) => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read a dataset from a JSON file
///
/// The file must hold a JSON array of objects; each object is one record whose
/// fields are numbers, strings or `null`.
///
/// # Errors
///
/// Returns error if file cannot be opened or parsed
pub fn read_dataset_file<P>(path: P) -> anyhow::Result<Dataset>
where
    P: AsRef<Path>,
{
    let dataset: Dataset = read_json_file("dataset", &path)?;
    tracing::info!(
        records = dataset.len(),
        path = %path.as_ref().display(),
        "loaded dataset"
    );
    Ok(dataset)
}

/// Formats values the way the demo prints lists: `[a, b, c]`.
pub fn format_list<I, T>(values: I) -> String
where
    I: IntoIterator<Item = T>,
    T: std::fmt::Display,
{
    let items = values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use datalens_analyzer::Value;

    use super::*;

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(Vec::<f64>::new()), "[]");
        assert_eq!(format_list([1.5, 2.0]), "[1.5, 2]");
        assert_eq!(
            format_list([Value::from("Eve"), Value::Missing]),
            "[Eve, null]"
        );
    }

    #[test]
    fn test_read_dataset_file() {
        let path = std::env::temp_dir().join(format!("datalens-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"age": 25, "name": "John"}, {"age": null}]"#).unwrap();
        let dataset = read_dataset_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset[0].value("age"), &Value::Number(25.0));
        assert_eq!(dataset[1].value("age"), &Value::Missing);
    }

    #[test]
    fn test_read_dataset_file_reports_path() {
        let err = read_dataset_file("/nonexistent/datalens.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/datalens.json"));
    }
}
