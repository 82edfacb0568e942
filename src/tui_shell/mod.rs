use anyhow::Result;

mod app;
mod input;

pub(crate) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
