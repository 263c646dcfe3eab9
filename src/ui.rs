//! Terminal output formatting.
//!
//! Pure display helpers; no prompts, no state. Everything the binary prints
//! goes through here so the reports stay uniform.

use crate::domain::{Commit, Version};
use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print the latest tag.
pub fn display_tag(tag: &str) {
    println!("Latest tag: {}", style(tag).cyan());
}

/// Print the current commit hash.
pub fn display_hash(hash: &str) {
    println!("Current commit hash: {}", style(hash).cyan());
}

/// Print the structured fields of a parsed tag.
pub fn display_version(tag: &str, version: &Version) {
    println!("{}", style(format!("Tag '{}'", tag)).bold());
    println!("  major:          {}", version.major);
    println!("  minor:          {}", version.minor);
    println!("  bug:            {}", version.bug);
    println!("  stage:          {}", version.stage);
    println!("  stage revision: {}", version.stage_rev);
}

/// Print the commit-difference report between two refs.
///
/// One banner-delimited entry per commit, newest first.
pub fn display_diff_report(from: &str, to: &str, commits: &[Commit]) {
    println!(
        "{}",
        style(format!("Commit difference between {} and {}:", from, to)).bold()
    );

    if commits.is_empty() {
        println!("  (no commits in range)");
        return;
    }

    for commit in commits {
        println!("=========================================");
        println!("Author: {}", commit.author.name);
        println!("Date: {}", commit.report_date());
        println!("Title: {}", commit.title);
        println!("Message: {}", commit.message);
        println!("=========================================");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commit::parse_git_date;
    use crate::domain::User;

    #[test]
    fn test_display_helpers_do_not_panic() {
        display_error("test error");
        display_success("test success");
        display_status("test status");
        display_tag("1.2.3");
        display_hash("abc123");
    }

    #[test]
    fn test_display_reports_do_not_panic() {
        let version = Version::parse("1.2.1-rc.3").unwrap();
        display_version("1.2.1-rc.3", &version);

        let commit = Commit {
            hash: "abc123".to_string(),
            author: User {
                name: "Jane Doe".to_string(),
                email: "jane@x.com".to_string(),
            },
            date: parse_git_date("Mon Jan 02 15:04:05 2006 -0700").unwrap(),
            title: "Fix bug".to_string(),
            message: "line1line2".to_string(),
        };
        display_diff_report("1.2.1", "1.2.0", &[commit]);
        display_diff_report("a", "b", &[]);
    }
}
