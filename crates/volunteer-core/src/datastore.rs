use std::collections::BTreeSet;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use tracing::{debug, info};
use volunteer_model::{TaskProvider, VolunteerTask};

/// Reads tasks from a JSON-lines file, one task object per line.
#[derive(Debug, Clone)]
pub struct JsonlTaskProvider {
    pub path: PathBuf,
}

impl JsonlTaskProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TaskProvider for JsonlTaskProvider {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn list_tasks(&self) -> anyhow::Result<Vec<VolunteerTask>> {
        let tasks = load_jsonl(&self.path)
            .with_context(|| format!("failed to load tasks from {}", self.path.display()))?;
        info!(count = tasks.len(), "loaded task file");
        Ok(tasks)
    }
}

#[tracing::instrument(skip(path))]
fn load_jsonl(path: &Path) -> anyhow::Result<Vec<VolunteerTask>> {
    debug!(file = %path.display(), "loading jsonl");
    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);

    let mut out = Vec::new();
    let mut seen = BTreeSet::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let task: VolunteerTask = serde_json::from_str(trimmed)
            .with_context(|| format!("failed parsing {} line {}", path.display(), idx + 1))?;
        if !seen.insert(task.id) {
            return Err(anyhow!(
                "duplicate task id {} at {} line {}",
                task.id,
                path.display(),
                idx + 1
            ));
        }
        out.push(task);
    }

    debug!(count = out.len(), "loaded tasks from jsonl");
    Ok(out)
}
