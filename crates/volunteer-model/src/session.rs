use serde::{
  Deserialize,
  Serialize
};

/// Authentication state handed in by
/// whoever owns sign-in.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub enum Session {
  #[default]
  Anonymous,
  SignedIn {
    username: String
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum HeaderAction {
  Greeting(String),
  Link {
    label: &'static str,
    route: &'static str
  },
  Logout
}

impl Session {
  pub fn from_username(
    username: Option<&str>
  ) -> Self {
    match username.map(str::trim) {
      | Some(name) if !name.is_empty() => {
        Session::SignedIn {
          username: name.to_string()
        }
      }
      | _ => Session::Anonymous
    }
  }

  pub fn username(&self) -> Option<&str> {
    match self {
      | Session::Anonymous => None,
      | Session::SignedIn {
        username
      } => Some(username.as_str())
    }
  }

  pub fn header_actions(
    &self
  ) -> Vec<HeaderAction> {
    match self {
      | Session::Anonymous => vec![
        HeaderAction::Link {
          label: "Sign in",
          route: "/login"
        },
        HeaderAction::Link {
          label: "Create an Account",
          route: "/register"
        },
      ],
      | Session::SignedIn {
        username
      } => vec![
        HeaderAction::Greeting(format!(
          "Hello, {username}"
        )),
        HeaderAction::Logout,
      ]
    }
  }

  /// Returns the post-logout session and
  /// the route to navigate to.
  pub fn logout(
    self
  ) -> (Session, &'static str) {
    (Session::Anonymous, "/")
  }
}

#[cfg(test)]
mod tests {
  use super::{
    HeaderAction,
    Session
  };

  #[test]
  fn anonymous_header_offers_sign_in() {
    let actions =
      Session::Anonymous.header_actions();
    assert_eq!(
      actions,
      vec![
        HeaderAction::Link {
          label: "Sign in",
          route: "/login"
        },
        HeaderAction::Link {
          label: "Create an Account",
          route: "/register"
        },
      ]
    );
  }

  #[test]
  fn signed_in_header_greets_and_logs_out()
  {
    let session =
      Session::from_username(Some(
        " amina "
      ));
    assert_eq!(
      session.username(),
      Some("amina")
    );
    assert_eq!(
      session.header_actions(),
      vec![
        HeaderAction::Greeting(
          "Hello, amina".to_string()
        ),
        HeaderAction::Logout,
      ]
    );

    let (after, route) = session.logout();
    assert_eq!(after, Session::Anonymous);
    assert_eq!(route, "/");
  }

  #[test]
  fn blank_username_is_anonymous() {
    assert_eq!(
      Session::from_username(Some("  ")),
      Session::Anonymous
    );
    assert_eq!(
      Session::from_username(None),
      Session::Anonymous
    );
  }
}
