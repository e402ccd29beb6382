use anyhow::Result;

use crate::model::tracker::TaskTracker;

pub trait TrackerRepository {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<TaskTracker>>;
    fn save(&self, tracker: &TaskTracker) -> Result<()>;
}
