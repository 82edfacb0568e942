use anyhow::Result;

use crate::model::Session;
use crate::remote::RemoteClient;

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub client: RemoteClient,
    pub session: Session,
}

pub fn run(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(opts)
}
