use chrono::NaiveDate;

use crate::community::{
  CommunityEvent,
  HowItWorksStep,
  LandingHighlight
};
use crate::task::VolunteerTask;

pub const CROWD_CONTROL: &str =
  "crowd control";
pub const SETUP: &str = "setup";

/// Task categories offered by the type
/// select, as `(value, label)`.
pub const TASK_KINDS: [(&str, &str); 2] = [
  (CROWD_CONTROL, "Crowd Control"),
  (SETUP, "Setup")
];

fn task(
  id: u64,
  name: &str,
  kind: &str,
  (y, m, d): (i32, u32, u32),
  time: &str,
  volunteers: u32,
  points: u32
) -> VolunteerTask {
  let date =
    NaiveDate::from_ymd_opt(y, m, d)
      .unwrap_or_default();
  VolunteerTask::new(id, name, kind, date)
    .with_time(time)
    .with_volunteers_needed(volunteers)
    .with_points(points)
}

pub fn sample_tasks() -> Vec<VolunteerTask>
{
  vec![
    task(
      1,
      "Jumu'ah Parking Management",
      CROWD_CONTROL,
      (2024, 11, 8),
      "12:00 PM",
      6,
      15
    ),
    task(
      2,
      "Friday Prayer Setup",
      SETUP,
      (2024, 11, 8),
      "11:00 AM",
      4,
      10
    ),
    task(
      3,
      "Community Iftar Tables",
      SETUP,
      (2024, 11, 9),
      "4:30 PM",
      8,
      15
    ),
    task(
      4,
      "Iftar Line Marshals",
      CROWD_CONTROL,
      (2024, 11, 9),
      "5:30 PM",
      5,
      20
    ),
    task(
      5,
      "Sisters' Entrance Ushers",
      CROWD_CONTROL,
      (2024, 11, 10),
      "6:00 PM",
      3,
      10
    ),
    task(
      6,
      "Lecture Hall Chairs",
      SETUP,
      (2024, 11, 10),
      "5:00 PM",
      4,
      10
    ),
    task(
      7,
      "Eid Prayer Mats",
      SETUP,
      (2024, 11, 15),
      "6:00 AM",
      10,
      25
    ),
    task(
      8,
      "Eid Parking Management",
      CROWD_CONTROL,
      (2024, 11, 15),
      "7:30 AM",
      12,
      30
    ),
    task(
      9,
      "Eid Decoration Setup",
      SETUP,
      (2024, 11, 14),
      "6:00 PM",
      6,
      20
    ),
    task(
      10,
      "Youth Night Door Team",
      CROWD_CONTROL,
      (2024, 11, 16),
      "7:00 PM",
      2,
      5
    ),
    task(
      11,
      "Food Drive Packing Stations",
      SETUP,
      (2024, 11, 20),
      "5:00 PM",
      7,
      15
    ),
    task(
      12,
      "Taraweeh Overflow Guides",
      CROWD_CONTROL,
      (2024, 11, 20),
      "8:30 PM",
      4,
      20
    )
  ]
}

pub fn sample_events() -> Vec<CommunityEvent>
{
  let event = |id: u64,
               name: &str,
               when: &str,
               location: &str,
               description: &str| {
    CommunityEvent {
      id,
      name: name.to_string(),
      when: when.to_string(),
      location: location.to_string(),
      description: description
        .to_string()
    }
  };

  vec![
    event(
      1,
      "Community Clean-Up",
      "Saturday, 9:00 AM",
      "Mosque Grounds",
      "Join us for a community clean-up \
       event to help keep our mosque \
       clean and welcoming for everyone."
    ),
    event(
      2,
      "Ramadan Food Drive",
      "Next Wednesday, 5:00 PM",
      "Mosque Kitchen",
      "Help us pack and distribute food \
       packages to those in need during \
       Ramadan."
    ),
    event(
      3,
      "Eid Decoration Setup",
      "Eid Eve, 6:00 PM",
      "Main Hall",
      "Assist in setting up decorations \
       for Eid celebrations to make the \
       event special for the community."
    ),
  ]
}

pub fn landing_highlights()
-> Vec<LandingHighlight> {
  [
    ("Friday Prayer Setup", "Next Friday, 3:00 PM", 10),
    ("Eid Parking Management", "Eid Morning, 8:00 AM", 20),
    (
      "Community Iftar Preparation",
      "Tomorrow, 5:30 PM",
      15
    )
  ]
  .into_iter()
  .map(|(title, when, points)| {
    LandingHighlight {
      title: title.to_string(),
      when: when.to_string(),
      points
    }
  })
  .collect()
}

pub fn how_it_works() -> Vec<HowItWorksStep>
{
  [
    (
      "Sign Up",
      "Create an account to get started."
    ),
    (
      "Find a Task",
      "Browse tasks that fit your \
       interests."
    ),
    (
      "Clock In/Out",
      "Log your hours to keep track of \
       contributions."
    ),
    (
      "Earn Points",
      "Gain points for every hour of \
       service."
    )
  ]
  .into_iter()
  .map(|(step, description)| {
    HowItWorksStep {
      step:        step.to_string(),
      description: description
        .to_string()
    }
  })
  .collect()
}
