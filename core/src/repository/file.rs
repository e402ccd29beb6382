use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json;
use tracing::info;

use crate::model::task::Task;
use crate::model::tracker::TaskTracker;
use crate::repository::traits::TrackerRepository;

pub const DEFAULT_FILE_NAME: &str = "tracker.json";

/// On-disk shape of a [`TaskTracker`].
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
struct JsonTracker {
    #[serde(default)]
    tasks: Vec<Task>,
    #[serde(default)]
    daily_tasks: Vec<Task>,
}

impl From<&TaskTracker> for JsonTracker {
    fn from(tracker: &TaskTracker) -> Self {
        Self {
            tasks: tracker.tasks().to_vec(),
            daily_tasks: tracker.daily_tasks().to_vec(),
        }
    }
}

impl TryFrom<JsonTracker> for TaskTracker {
    type Error = anyhow::Error;

    fn try_from(json: JsonTracker) -> Result<Self> {
        let mut tracker = TaskTracker::new();
        tracker
            .set_tasks(json.tasks)
            .context("Task list contains duplicate tasks")?;
        tracker
            .set_daily_tasks(json.daily_tasks)
            .context("Daily task list contains duplicate tasks")?;
        if !tracker.is_daily_subset() {
            bail!("Daily task list contains tasks missing from the task list");
        }
        Ok(tracker)
    }
}

/// Stores the whole tracker as one pretty-printed JSON document.
#[derive(Clone, Debug)]
pub struct FileTrackerRepository {
    file_path: PathBuf,
}

impl FileTrackerRepository {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        FileTrackerRepository {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_tracker(&self) -> Result<TaskTracker> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let json: JsonTracker = serde_json::from_reader(reader)?;
        TaskTracker::try_from(json)
    }

    fn write_tracker(&self, tracker: &TaskTracker) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?; // Ensure the directory exists
        }
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &JsonTracker::from(tracker))?;
        writer.flush()?;
        Ok(())
    }
}

impl TrackerRepository for FileTrackerRepository {
    fn load(&self) -> Result<Option<TaskTracker>> {
        if !self.file_path.exists() {
            info!(path = %self.file_path.display(), "No data file found");
            return Ok(None);
        }
        let tracker = self
            .read_tracker()
            .with_context(|| format!("Data file {} is corrupt", self.file_path.display()))?;
        info!(
            path = %self.file_path.display(),
            tasks = tracker.tasks().len(),
            daily_tasks = tracker.daily_tasks().len(),
            "Loaded task tracker"
        );
        Ok(Some(tracker))
    }

    fn save(&self, tracker: &TaskTracker) -> Result<()> {
        self.write_tracker(tracker)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        info!(path = %self.file_path.display(), "Saved task tracker");
        Ok(())
    }
}
