use crate::cli::TaskAction;
use crate::context::CliContext;
use crate::handlers::LineConfirm;
use crate::output;
use std::io;
use todo_core::Notice;
use todo_domain::{FixedAnswer, Outcome, PresentationPort, TaskList};

/// One-shot commands print the final list themselves, so rendering is a no-op.
struct QuietPresenter;

impl PresentationPort for QuietPresenter {
    fn render(&mut self, tasks: &TaskList) {
        tracing::debug!("{} tasks after command", tasks.len());
    }

    fn notify(&mut self, notice: Notice) {
        tracing::debug!("Notice: {}", notice);
    }
}

pub fn handle(ctx: &CliContext, action: TaskAction) -> anyhow::Result<()> {
    let mut controller = ctx.open(QuietPresenter)?;

    let outcome = match action {
        TaskAction::List => return output::output_list(controller.tasks(), false),
        TaskAction::Add { text } => controller.add_task(&text.join(" "))?,
        TaskAction::Edit { index, text } => controller.edit_task(index, &text.join(" "))?,
        TaskAction::Remove { index } => controller.remove_task(index)?,
        TaskAction::Toggle { index } => controller.toggle_task(index)?,
        TaskAction::CheckAll => controller.check_all()?,
        TaskAction::UncheckAll => controller.uncheck_all()?,
        TaskAction::Clear { yes: true } => controller.clear_all(&mut FixedAnswer(true))?,
        TaskAction::Clear { yes: false } => {
            let mut stdin = io::stdin().lock();
            controller.clear_all(&mut LineConfirm::new(&mut stdin))?
        }
    };

    match outcome {
        Outcome::Applied => output::output_list(controller.tasks(), true),
        Outcome::Declined => output::output_list(controller.tasks(), false),
        Outcome::Rejected(notice) => output::output_error(notice.message()),
    }
}
