use std::collections::HashMap;
use std::fs;
use std::path::{
  Path,
  PathBuf
};

use anyhow::{
  Context,
  anyhow
};
use tracing::{
  debug,
  info,
  trace
};
use volunteer_model::{
  DeleteMode,
  Session,
  ViewModelPolicy
};

pub const RC_ENV_VAR: &str =
  "VOLUNTEERRC";
pub const RC_FILE_NAME: &str =
  ".volunteerrc";

#[derive(Debug, Clone)]
pub struct Config {
  map:              HashMap<String, String>,
  pub loaded_files: Vec<PathBuf>,
  include_stack:    Vec<PathBuf>
}

impl Default for Config {
  fn default() -> Self {
    let mut map = HashMap::new();
    map.insert(
      "tasks.reset_page_on_filter"
        .to_string(),
      "off".to_string()
    );
    map.insert(
      "tasks.delete_mode".to_string(),
      "cosmetic".to_string()
    );
    map.insert(
      "color".to_string(),
      "on".to_string()
    );

    Self {
      map,
      loaded_files: vec![],
      include_stack: vec![]
    }
  }
}

impl Config {
  #[tracing::instrument(skip(
    rc_override
  ))]
  pub fn load(
    rc_override: Option<&Path>
  ) -> anyhow::Result<Self> {
    let mut cfg = Config::default();

    let rc = resolve_rc_path(rc_override)?;
    if let Some(path) = rc {
      info!(rc = %path.display(), "loading rc file");
      cfg.load_file(&path)?;
    } else {
      debug!(
        "no rc file found; using \
         defaults"
      );
    }

    Ok(cfg)
  }

  #[tracing::instrument(skip(
    self, overrides
  ))]
  pub fn apply_overrides<I>(
    &mut self,
    overrides: I
  ) where
    I: IntoIterator<
      Item = (String, String)
    >
  {
    for (k, v) in overrides {
      let key = k
        .strip_prefix("rc.")
        .unwrap_or(&k)
        .to_string();
      debug!(key = %key, value = %v, "applying override");
      self.map.insert(key, v);
    }
  }

  pub fn get(
    &self,
    key: &str
  ) -> Option<String> {
    self.map.get(key).cloned()
  }

  pub fn get_bool(
    &self,
    key: &str
  ) -> Option<bool> {
    self
      .map
      .get(key)
      .map(|v| parse_bool(v))
  }

  pub fn policy(
    &self
  ) -> anyhow::Result<ViewModelPolicy> {
    let delete_mode = match self
      .get("tasks.delete_mode")
    {
      | Some(raw) => raw
        .parse::<DeleteMode>()
        .context(
          "invalid tasks.delete_mode"
        )?,
      | None => DeleteMode::default()
    };

    Ok(ViewModelPolicy {
      reset_page_on_filter: self
        .get_bool(
          "tasks.reset_page_on_filter"
        )
        .unwrap_or(false),
      delete_mode
    })
  }

  pub fn tasks_file(
    &self
  ) -> Option<PathBuf> {
    self
      .get("tasks.file")
      .filter(|v| !v.trim().is_empty())
      .map(|v| {
        expand_tilde(Path::new(v.trim()))
      })
  }

  pub fn session(&self) -> Session {
    Session::from_username(
      self.get("session.user").as_deref()
    )
  }

  #[tracing::instrument(skip(self))]
  pub fn load_file(
    &mut self,
    path: &Path
  ) -> anyhow::Result<()> {
    let path = expand_tilde(path);
    let text =
      fs::read_to_string(&path)
        .with_context(|| {
          format!(
            "failed to read {}",
            path.display()
          )
        })?;

    self
      .loaded_files
      .push(path.clone());

    self.include_stack.push(path.clone());
    let result = self.load_lines(&path, &text);
    self.include_stack.pop();
    result
  }

  /// Only files on the current include
  /// chain count as a cycle; a file reached
  /// twice through separate includes is
  /// fine.
  fn load_lines(
    &mut self,
    path: &Path,
    text: &str
  ) -> anyhow::Result<()> {
    let base_dir = path
      .parent()
      .map(|p| p.to_path_buf())
      .unwrap_or_else(|| {
        PathBuf::from(".")
      });

    for (line_num, raw_line) in
      text.lines().enumerate()
    {
      let mut line = raw_line.trim();
      if let Some((before, _)) =
        line.split_once('#')
      {
        line = before.trim();
      }

      if line.is_empty() {
        continue;
      }

      if let Some(include_rest) =
        line.strip_prefix("include ")
      {
        let include_path =
          resolve_include_path(
            &base_dir,
            include_rest.trim()
          )?;
        debug!(
            file = %path.display(),
            include = %include_path.display(),
            line = line_num + 1,
            "processing include"
        );

        if self
          .include_stack
          .contains(&include_path)
        {
          return Err(anyhow!(
            "include cycle at {}:{}: {}",
            path.display(),
            line_num + 1,
            include_path.display()
          ));
        }
        self.load_file(&include_path)?;
        continue;
      }

      let (k, v) = line
        .split_once('=')
        .ok_or_else(|| {
          anyhow!(
            "invalid config line \
             {}:{}: {}",
            path.display(),
            line_num + 1,
            raw_line
          )
        })?;

      let key = k.trim().to_string();
      let value = v.trim().to_string();
      trace!(key = %key, value = %value, "loaded config key");
      self.map.insert(key, value);
    }

    Ok(())
  }
}

#[tracing::instrument(skip(
  override_path
))]
fn resolve_rc_path(
  override_path: Option<&Path>
) -> anyhow::Result<Option<PathBuf>> {
  if let Some(path) = override_path {
    return Ok(Some(path.to_path_buf()));
  }

  if let Ok(rc_env) =
    std::env::var(RC_ENV_VAR)
  {
    if rc_env == "/dev/null" {
      return Ok(None);
    }
    return Ok(Some(PathBuf::from(
      rc_env
    )));
  }

  let Some(home) = dirs::home_dir()
  else {
    debug!(
      "cannot determine home \
       directory; skipping rc lookup"
    );
    return Ok(None);
  };
  let candidate = home.join(RC_FILE_NAME);
  if candidate.exists() {
    return Ok(Some(candidate));
  }

  Ok(None)
}

fn resolve_include_path(
  base_dir: &Path,
  include: &str
) -> anyhow::Result<PathBuf> {
  if include.trim().is_empty() {
    return Err(anyhow!(
      "include path cannot be empty"
    ));
  }

  let raw = PathBuf::from(include);
  let expanded = expand_tilde(&raw);
  if expanded.is_absolute() {
    Ok(expanded)
  } else {
    Ok(base_dir.join(expanded))
  }
}

pub fn expand_tilde(
  path: &Path
) -> PathBuf {
  let text = path.to_string_lossy();
  if let Some(rest) =
    text.strip_prefix("~/")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}

fn parse_bool(s: &str) -> bool {
  matches!(
    s.trim()
      .to_ascii_lowercase()
      .as_str(),
    "1" | "y" | "yes" | "on" | "true"
  )
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;
  use volunteer_model::{
    DeleteMode,
    Session
  };

  use super::Config;

  #[test]
  fn defaults_are_observed_behavior() {
    let cfg = Config::default();
    let policy =
      cfg.policy().expect("policy");
    assert!(!policy.reset_page_on_filter);
    assert_eq!(
      policy.delete_mode,
      DeleteMode::Cosmetic
    );
    assert_eq!(
      cfg.session(),
      Session::Anonymous
    );
    assert!(cfg.tasks_file().is_none());
  }

  #[test]
  fn rc_file_with_include_and_comments() {
    let dir = tempdir().expect("tempdir");
    let extra = dir.path().join("extra.rc");
    fs::write(
      &extra,
      "session.user = bilal\n"
    )
    .expect("write include");

    let main = dir.path().join("main.rc");
    fs::write(
      &main,
      "# volunteer settings\n\
       tasks.delete_mode = remove  # real deletes\n\
       \n\
       tasks.reset_page_on_filter = yes\n\
       include extra.rc\n"
    )
    .expect("write rc");

    let cfg = Config::load(Some(main.as_path()))
      .expect("load rc");
    assert_eq!(cfg.loaded_files.len(), 2);

    let policy =
      cfg.policy().expect("policy");
    assert!(policy.reset_page_on_filter);
    assert_eq!(
      policy.delete_mode,
      DeleteMode::Remove
    );
    assert_eq!(
      cfg.session().username(),
      Some("bilal")
    );
  }

  #[test]
  fn overrides_strip_rc_prefix() {
    let mut cfg = Config::default();
    cfg.apply_overrides(vec![(
      "rc.color".to_string(),
      "off".to_string()
    )]);
    assert_eq!(cfg.get_bool("color"), Some(false));
  }

  #[test]
  fn malformed_line_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bad.rc");
    fs::write(&path, "color on\n")
      .expect("write rc");

    let err = Config::load(Some(path.as_path()))
      .expect_err("should fail");
    assert!(
      format!("{err:#}")
        .contains("invalid config line")
    );
  }

  #[test]
  fn invalid_delete_mode_is_reported() {
    let mut cfg = Config::default();
    cfg.apply_overrides(vec![(
      "tasks.delete_mode".to_string(),
      "shred".to_string()
    )]);
    assert!(cfg.policy().is_err());
  }

  #[test]
  fn include_cycle_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("loop.rc");
    fs::write(&path, "include loop.rc\n")
      .expect("write rc");

    assert!(
      Config::load(Some(path.as_path())).is_err()
    );
  }

  #[test]
  fn shared_include_is_not_a_cycle() {
    let dir = tempdir().expect("tempdir");
    fs::write(
      dir.path().join("common.rc"),
      "session.user = amina\n"
    )
    .expect("write common");
    fs::write(
      dir.path().join("a.rc"),
      "include common.rc\ncolor = off\n"
    )
    .expect("write a");
    fs::write(
      dir.path().join("b.rc"),
      "include common.rc\ntasks.delete_mode = remove\n"
    )
    .expect("write b");
    let main = dir.path().join("main.rc");
    fs::write(
      &main,
      "include a.rc\ninclude b.rc\n"
    )
    .expect("write main");

    let cfg = Config::load(Some(main.as_path()))
      .expect("diamond include loads");
    assert_eq!(cfg.loaded_files.len(), 5);
    assert_eq!(cfg.get_bool("color"), Some(false));
    assert_eq!(
      cfg.session().username(),
      Some("amina")
    );
    assert_eq!(
      cfg.policy().expect("policy").delete_mode,
      DeleteMode::Remove
    );
  }
}
