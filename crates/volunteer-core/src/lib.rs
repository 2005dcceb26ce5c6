pub mod cli;
pub mod commands;
pub mod config;
pub mod datastore;
pub mod render;
pub mod shell;

use std::ffi::OsString;

use anyhow::Context;
use clap::Parser;
use tracing::{
  debug,
  info
};
use volunteer_model::{
  StaticTaskProvider,
  TaskProvider
};

#[tracing::instrument(skip_all)]
pub fn run(
  raw_args: Vec<OsString>
) -> anyhow::Result<()> {
  let pre =
    cli::preprocess_args(&raw_args)?;
  let cli = cli::GlobalCli::parse_from(
    pre.cleaned_args
  );

  cli::init_tracing(
    cli.verbose,
    cli.quiet
  )?;

  info!(
    verbose = cli.verbose,
    quiet = cli.quiet,
    "starting volunteer CLI"
  );
  debug!(?pre.rc_overrides, "preprocessed rc overrides");

  let mut cfg = config::Config::load(
    cli.rc_file.as_deref()
  )?;
  cfg.apply_overrides(
    pre.rc_overrides.into_iter().chain(
      cli
        .rc_overrides
        .into_iter()
        .map(|kv| (kv.key, kv.value))
    )
  );

  let tasks_file = cli
    .tasks
    .map(|path| {
      config::expand_tilde(&path)
    })
    .or_else(|| cfg.tasks_file());
  let provider: Box<dyn TaskProvider> =
    match tasks_file {
      | Some(path) => {
        info!(file = %path.display(), "using task file");
        Box::new(
          datastore::JsonlTaskProvider::new(
            path
          )
        )
      }
      | None => {
        debug!("using bundled sample tasks");
        Box::new(
          StaticTaskProvider::default()
        )
      }
    };

  let ctx = commands::CommandContext {
    provider: provider.as_ref(),
    policy:   cfg
      .policy()
      .context(
        "failed to read task page \
         settings"
      )?,
    session:  cfg.session(),
    renderer: render::Renderer::new(&cfg)
  };

  let command =
    cli.command.unwrap_or_else(|| {
      cli::Command::Tasks(
        cli::TasksArgs::default()
      )
    });
  let stdout = std::io::stdout();
  commands::dispatch(
    &ctx,
    command,
    &mut stdout.lock()
  )?;

  info!("done");
  Ok(())
}
