//! Info header templating and timestamp formatting.
//!
//! The header line above the chart is rendered from a user-editable
//! template with `{{key}}` placeholders. Known keys are substituted from
//! the loaded history; unknown or malformed placeholders are left in the
//! output verbatim so a template typo shows itself instead of vanishing.

use chrono::{Local, TimeZone};

use crate::history::RunHistory;

/// Header template used until the user customizes one
pub const DEFAULT_INFO_TEMPLATE: &str =
    "Timing history for {{reponame}} ({{firstrun}} to {{lastrun}})";

/// Values available to the info header template
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoContext {
    pub reponame: String,
    pub firstrun: String,
    pub lastrun: String,
}

impl InfoContext {
    /// Build template values from a loaded history. Run bounds are
    /// expected in epoch milliseconds (post-session scaling).
    pub fn from_history(history: &RunHistory) -> Self {
        InfoContext {
            reponame: history.repository.clone(),
            firstrun: format_local_ms(history.first_run),
            lastrun: format_local_ms(history.last_run),
        }
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        match key {
            "reponame" => Some(&self.reponame),
            "firstrun" => Some(&self.firstrun),
            "lastrun" => Some(&self.lastrun),
            _ => None,
        }
    }
}

/// Render a `{{key}}` template against the info context.
///
/// Unknown keys and unterminated placeholders are copied through
/// unchanged. Whitespace inside braces is tolerated (`{{ reponame }}`).
pub fn render_template(template: &str, context: &InfoContext) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                match context.lookup(key) {
                    Some(value) => out.push_str(value),
                    // Unknown key: keep the placeholder text, braces included
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                // No closing braces; emit the tail as-is
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Format an epoch-millisecond timestamp in the local timezone
pub fn format_local_ms(time_ms: f64) -> String {
    Local
        .timestamp_millis_opt(time_ms as i64)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "invalid time".to_string())
}
