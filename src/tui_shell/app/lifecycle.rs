use super::*;

impl App {
    pub(super) fn load(opts: crate::tui::TuiRunOptions) -> Self {
        let mut app = App::new(opts.client.base_url(), opts.session);
        app.transcript.print_plain("exit or quit leaves program.");
        app.transcript.print_plain("help lists commands.");
        tracing::info!(
            server = app.server.as_str(),
            path = app.session.current_path(),
            "interactive session started"
        );
        app
    }
}
