use crate::sample;
use crate::task::VolunteerTask;

/// Source of the task collection the
/// view-model is built from.
pub trait TaskProvider {
  fn list_tasks(
    &self
  ) -> anyhow::Result<Vec<VolunteerTask>>;
}

/// In-memory provider, by default backed
/// by the bundled sample tasks.
#[derive(Debug, Clone)]
pub struct StaticTaskProvider {
  tasks: Vec<VolunteerTask>
}

impl StaticTaskProvider {
  pub fn new(
    tasks: Vec<VolunteerTask>
  ) -> Self {
    Self {
      tasks
    }
  }
}

impl Default for StaticTaskProvider {
  fn default() -> Self {
    Self::new(sample::sample_tasks())
  }
}

impl TaskProvider for StaticTaskProvider {
  fn list_tasks(
    &self
  ) -> anyhow::Result<Vec<VolunteerTask>>
  {
    Ok(self.tasks.clone())
  }
}

impl<P: TaskProvider + ?Sized>
  TaskProvider for &P
{
  fn list_tasks(
    &self
  ) -> anyhow::Result<Vec<VolunteerTask>>
  {
    (**self).list_tasks()
  }
}

impl<P: TaskProvider + ?Sized>
  TaskProvider for Box<P>
{
  fn list_tasks(
    &self
  ) -> anyhow::Result<Vec<VolunteerTask>>
  {
    (**self).list_tasks()
  }
}
