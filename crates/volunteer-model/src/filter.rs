use std::fmt;
use std::str::FromStr;

use anyhow::{
  Context,
  anyhow
};
use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};
use tracing::trace;

use crate::task::VolunteerTask;

/// Form field names as they appear on
/// the task filter form.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub enum FilterField {
  Type,
  Date,
  MinPoints
}

impl FilterField {
  pub const ALL: [FilterField; 3] = [
    FilterField::Type,
    FilterField::Date,
    FilterField::MinPoints
  ];

  pub fn form_name(
    self
  ) -> &'static str {
    match self {
      | FilterField::Type => "type",
      | FilterField::Date => "date",
      | FilterField::MinPoints => {
        "points"
      }
    }
  }
}

impl fmt::Display for FilterField {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.form_name())
  }
}

impl FromStr for FilterField {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    match s.trim() {
      | "type" => Ok(FilterField::Type),
      | "date" => Ok(FilterField::Date),
      | "points" | "minPoints"
      | "min_points"
      | "min-points" => {
        Ok(FilterField::MinPoints)
      }
      | other => Err(anyhow!(
        "unknown filter field: {other}"
      ))
    }
  }
}

/// The `(type, date, minPoints)` triple.
/// `None` means no constraint.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct FilterCriteria {
  pub kind:       Option<String>,
  pub date:       Option<NaiveDate>,
  pub min_points: Option<u32>
}

impl FilterCriteria {
  pub fn is_unset(&self) -> bool {
    self.kind.is_none()
      && self.date.is_none()
      && self.min_points.is_none()
  }

  pub fn matches(
    &self,
    task: &VolunteerTask
  ) -> bool {
    if let Some(kind) =
      self.kind.as_deref()
      && task.kind != kind
    {
      return false;
    }

    if let Some(date) = self.date
      && task.date != date
    {
      return false;
    }

    if let Some(min) = self.min_points
      && task.points < min
    {
      return false;
    }

    true
  }

  /// Replaces one field from a raw form
  /// value. An empty value clears the
  /// field. On error the criteria are
  /// left untouched.
  pub fn set(
    &mut self,
    field: FilterField,
    value: &str
  ) -> anyhow::Result<()> {
    match field {
      // Type is compared verbatim, so only
      // an empty value clears it.
      | FilterField::Type => {
        self.kind = if value.is_empty() {
          None
        } else {
          Some(value.to_string())
        };
      }
      | FilterField::Date => {
        let value = value.trim();
        self.date = if value.is_empty() {
          None
        } else {
          Some(
            NaiveDate::parse_from_str(
              value, "%Y-%m-%d"
            )
            .with_context(|| {
              format!(
                "invalid date filter: \
                 {value}"
              )
            })?
          )
        };
      }
      | FilterField::MinPoints => {
        let value = value.trim();
        self.min_points =
          if value.is_empty() {
            None
          } else {
            Some(
              value
                .parse::<u32>()
                .with_context(|| {
                  format!(
                    "invalid minimum \
                     points: {value}"
                  )
                })?
            )
          };
      }
    }

    trace!(%field, value, "filter field set");
    Ok(())
  }

  /// Current value of a field as a form
  /// control would show it.
  pub fn form_value(
    &self,
    field: FilterField
  ) -> String {
    match field {
      | FilterField::Type => {
        self
          .kind
          .clone()
          .unwrap_or_default()
      }
      | FilterField::Date => self
        .date
        .map(|d| {
          d.format("%Y-%m-%d")
            .to_string()
        })
        .unwrap_or_default(),
      | FilterField::MinPoints => self
        .min_points
        .map(|p| p.to_string())
        .unwrap_or_default()
    }
  }
}

/// Stable filter: keeps source order.
pub fn apply_filters<'a>(
  tasks: &'a [VolunteerTask],
  criteria: &FilterCriteria
) -> Vec<&'a VolunteerTask> {
  tasks
    .iter()
    .filter(|task| {
      criteria.matches(task)
    })
    .collect()
}
