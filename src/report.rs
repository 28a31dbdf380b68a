//! Rendering of a user record for the terminal.

use anyhow::Result;
use chrono::SecondsFormat;

use crate::user::User;

/// Plain-text block, one field per line.
pub fn render_plain(user: &User) -> String {
    format!(
        "User Information:\nID: {}\nName: {}\nEmail: {}\nCreated: {}\n",
        user.id,
        user.name,
        user.email,
        user.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

pub fn render_json(user: &User) -> Result<String> {
    let mut out = serde_json::to_string_pretty(user)?;
    out.push('\n');
    Ok(out)
}
