use anyhow::{Context, Result};
use std::fmt::Display;
use std::fs;
use std::path::Path;

/// Human-readable status lines for one conversion run.
///
/// Every line is echoed to stdout as it is recorded and kept in memory so the
/// whole run can be saved next to the generated files.
#[derive(Debug)]
pub struct RunLog {
    lines: Vec<String>,
    echo: bool,
}

impl Default for RunLog {
    fn default() -> Self {
        Self::new()
    }
}

impl RunLog {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            echo: true,
        }
    }

    /// Records without printing
    pub fn quiet() -> Self {
        Self {
            lines: Vec::new(),
            echo: false,
        }
    }

    pub fn line(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        if self.echo {
            println!("{}", msg);
        }
        self.lines.push(msg);
    }

    pub fn blank(&mut self) {
        self.line(String::new());
    }

    /// Logs at most `limit` items, indented, followed by a count of the rest.
    pub fn preview<T: Display>(&mut self, items: &[T], limit: usize) {
        for item in items.iter().take(limit) {
            self.line(format!("   {}", item));
        }
        if items.len() > limit {
            self.line(format!("   ... and {} more", items.len() - limit));
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.lines.join("\n"))
            .with_context(|| format!("Failed to write run log: {}", path.display()))
    }
}

/// Writes the message, cause chain and (when captured) backtrace of a fatal
/// error.
pub fn write_error_dump(path: &Path, err: &anyhow::Error) -> Result<()> {
    let dump = format!("Error: {:#}\n\n{:?}\n", err, err);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, dump)
        .with_context(|| format!("Failed to write error dump: {}", path.display()))
}
