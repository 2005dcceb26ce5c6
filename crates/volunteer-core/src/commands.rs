use std::io::{self, Write};

use anyhow::Context as _;
use tracing::{debug, info, warn};
use volunteer_model::sample::{how_it_works, landing_highlights, sample_events};
use volunteer_model::{FilterField, Session, TaskProvider, TaskViewModel, ViewModelPolicy};

use crate::cli::{Command, TasksArgs};
use crate::render::Renderer;
use crate::shell;

/// Everything a command needs, resolved from config and flags.
pub struct CommandContext<'a> {
    pub provider: &'a dyn TaskProvider,
    pub policy: ViewModelPolicy,
    pub session: Session,
    pub renderer: Renderer,
}

/// Renders `command` into `out`. The shell reads its commands from stdin.
#[tracing::instrument(skip(ctx, out))]
pub fn dispatch<W: Write>(ctx: &CommandContext<'_>, command: Command, out: &mut W) -> anyhow::Result<()> {
    ctx.renderer.print_header(out, &ctx.session)?;

    match command {
        Command::Landing => {
            ctx.renderer
                .print_landing(out, &how_it_works(), &landing_highlights())?;
        }
        Command::Events => {
            ctx.renderer.print_events(out, &sample_events())?;
        }
        Command::Tasks(args) => {
            let vm = build_task_page(ctx, &args)?;
            ctx.renderer.print_task_page(out, &vm.snapshot())?;
        }
        Command::Shell => {
            let mut vm = TaskViewModel::from_provider(ctx.provider, ctx.policy)?;
            let stdin = io::stdin();
            shell::run_shell(&mut vm, &ctx.renderer, stdin.lock(), out)?;
        }
    }

    out.flush()?;
    info!("done");
    Ok(())
}

/// Applies the one-shot `tasks` flags in form order, then moves to the
/// requested page.
pub fn build_task_page(ctx: &CommandContext<'_>, args: &TasksArgs) -> anyhow::Result<TaskViewModel> {
    let mut vm = TaskViewModel::from_provider(ctx.provider, ctx.policy)?;

    let fields = [
        (FilterField::Type, "type", args.kind.as_deref()),
        (FilterField::Date, "date", args.date.as_deref()),
        (FilterField::MinPoints, "min-points", args.min_points.as_deref()),
    ];
    for (field, flag, value) in fields {
        if let Some(value) = value {
            vm.update_filter(field, value)
                .with_context(|| format!("invalid --{flag} value"))?;
        }
    }

    if let Some(page) = args.page
        && !vm.set_page(page)
    {
        warn!(
            requested = page,
            total = vm.total_pages(),
            "requested page out of range; showing page {}",
            vm.current_page()
        );
    }

    debug!(page = vm.current_page(), "task page built");
    Ok(vm)
}
