//! Changelog rendering
//!
//! Turns a commit sequence into a release-notes body, either plain text or
//! HTML. An outer template supplies the document shell with `{title}`,
//! `{version}`, `{author}` and `{change_log}` placeholders; each commit is
//! formatted as one list item. Delivery of the rendered body (mail or
//! otherwise) is out of scope here; callers write it where they want it.

use crate::domain::Commit;
use crate::error::{Result, VersionManagerError};

/// Per-commit item in a plain-text changelog
const TEXT_ITEM_FORMAT: &str = "\
   *  {title}
      {author}
      {date}
      {message}
";

/// Per-commit item in an HTML changelog
const HTML_ITEM_FORMAT: &str = "\
<li>
   {title}
   {author}
   {date}
   {message}
</li>
";

/// Output flavor for a rendered changelog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangelogFormat {
    Text,
    Html,
}

/// Document-level context for the outer template
#[derive(Debug, Clone, Default)]
pub struct ChangelogContext {
    /// Document title (typically the configured mail subject)
    pub title: String,
    /// Version tag the changelog covers
    pub version: String,
}

/// Render a changelog from an outer template and a commit sequence.
///
/// The commit list is rendered newest first, matching the order of the input
/// sequence. `{author}` expands to the author of the newest commit, or empty
/// for an empty window. An empty template is a
/// [VersionManagerError::Template].
pub fn render_changelog(
    template: &str,
    commits: &[Commit],
    context: &ChangelogContext,
    format: ChangelogFormat,
) -> Result<String> {
    if template.is_empty() {
        return Err(VersionManagerError::template("changelog template is empty"));
    }

    let item_format = match format {
        ChangelogFormat::Text => TEXT_ITEM_FORMAT,
        ChangelogFormat::Html => HTML_ITEM_FORMAT,
    };

    let change_log: String = commits
        .iter()
        .map(|commit| render_item(item_format, commit))
        .collect::<Vec<_>>()
        .join("\n");

    let author = commits
        .first()
        .map(|commit| commit.author.name.as_str())
        .unwrap_or("");

    Ok(template
        .replace("{title}", &context.title)
        .replace("{version}", &context.version)
        .replace("{author}", author)
        .replace("{change_log}", &change_log))
}

fn render_item(item_format: &str, commit: &Commit) -> String {
    item_format
        .replace("{title}", &commit.title)
        .replace("{author}", &commit.author.name)
        .replace("{date}", &commit.report_date())
        .replace("{message}", &commit.message)
}
