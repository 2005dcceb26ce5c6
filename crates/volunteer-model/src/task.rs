use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};

/// A volunteer task as supplied by a
/// [`TaskProvider`](crate::provider::TaskProvider).
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerTask {
  pub id:                u64,
  pub name:              String,
  #[serde(rename = "type")]
  pub kind:              String,
  pub date:              NaiveDate,
  #[serde(default)]
  pub time:              String,
  #[serde(default)]
  pub volunteers_needed: u32,
  #[serde(default)]
  pub points:            u32
}

impl VolunteerTask {
  pub fn new(
    id: u64,
    name: impl Into<String>,
    kind: impl Into<String>,
    date: NaiveDate
  ) -> Self {
    Self {
      id,
      name: name.into(),
      kind: kind.into(),
      date,
      time: String::new(),
      volunteers_needed: 0,
      points: 0
    }
  }

  #[must_use]
  pub fn with_time(
    mut self,
    time: impl Into<String>
  ) -> Self {
    self.time = time.into();
    self
  }

  #[must_use]
  pub fn with_volunteers_needed(
    mut self,
    count: u32
  ) -> Self {
    self.volunteers_needed = count;
    self
  }

  #[must_use]
  pub fn with_points(
    mut self,
    points: u32
  ) -> Self {
    self.points = points;
    self
  }
}
