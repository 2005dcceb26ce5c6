use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct CommunityEvent {
  pub id:          u64,
  pub name:        String,
  /// Free text, e.g. "Saturday, 9:00 AM".
  pub when:        String,
  pub location:    String,
  pub description: String
}

impl CommunityEvent {
  pub fn details_message(
    &self
  ) -> String {
    format!("Details for {}", self.name)
  }
}

/// A featured task on the landing page.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct LandingHighlight {
  pub title:  String,
  pub when:   String,
  pub points: u32
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct HowItWorksStep {
  pub step:        String,
  pub description: String
}
