use crate::{
    config::Config,
    journal::Journal,
    report,
    store::{MockStore, UserStore},
    Args,
};
use anyhow::{Context as _, Result};
use std::io::Write;
use std::path::PathBuf;

pub struct Context {
    pub args: Args,
    pub config: Config,
    pub session_id: String,
}

impl Context {
    /// Journal directory: CLI flag first, then config
    pub fn journal_dir(&self) -> Option<PathBuf> {
        self.args
            .journal_dir
            .clone()
            .or_else(|| self.config.journal.dir.clone())
    }

    pub fn user_name(&self) -> &str {
        self.args
            .name
            .as_deref()
            .unwrap_or_else(|| self.config.user_name())
    }

    pub fn user_email(&self) -> &str {
        self.args
            .email
            .as_deref()
            .unwrap_or_else(|| self.config.user_email())
    }
}

pub fn build_store(ctx: &Context) -> Result<MockStore> {
    let mut store = MockStore::new(ctx.config.mock_identity());
    if let Some(dir) = ctx.journal_dir() {
        store = store.with_journal(Journal::in_dir(&dir, &ctx.session_id)?);
    }
    if let Some(journal) = store.journal() {
        tracing::info!(path = %journal.path.display(), "journaling to file");
    }
    Ok(store)
}

/// Create, save, look up, print.
pub fn run(ctx: &Context, store: &mut impl UserStore, out: &mut impl Write) -> Result<()> {
    let user = store.create(ctx.user_name(), ctx.user_email());

    writeln!(out, "Saving user: {}", user.name)?;
    store.save(&user).context("saving user")?;

    let id = ctx.args.lookup_id.unwrap_or(user.id);
    let found = store.lookup(id).context("retrieving user")?;

    let rendered = if ctx.args.json {
        report::render_json(&found)?
    } else {
        report::render_plain(&found)
    };
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
