use crate::error::ChangelogError;
use crate::types::Result;
use crate::utils::{DIFF_CHANGELOG_HEADER_PATTERN, DIFF_HUNK_PATTERN};

/// Recovers, from a pull request diff, the 1-indexed line number of the
/// published line that directly precedes the first added changelog line.
///
/// Only the changelog file's portion of the diff is scanned; the count
/// restarts at each hunk marker and the marker line itself is not counted.
///
/// # Errors
/// Returns `DiffLocationNotFound` when the diff has no changelog portion,
/// no hunk marker, or no added line inside the changelog portion.
pub fn entry_line_from_diff(diff: &str) -> Result<usize> {
    let mut in_changelog_diff = false;
    let mut line_number: Option<usize> = None;

    for line in diff.lines() {
        if DIFF_CHANGELOG_HEADER_PATTERN.is_match(line) {
            in_changelog_diff = true;
            continue;
        }
        if !in_changelog_diff {
            continue;
        }
        if line.starts_with("diff --git") {
            // Another file's diff begins, the changelog portion is over
            break;
        }

        if let Some(captures) = DIFF_HUNK_PATTERN.captures(line) {
            let start = captures[1].parse().map_err(|_| {
                ChangelogError::DiffLocationNotFound(format!("unreadable hunk marker '{line}'"))
            })?;
            line_number = Some(start);
            continue;
        }

        if let Some(counted) = line_number {
            if line.starts_with('+') {
                // The entry sits one line above the first addition
                return counted.checked_sub(1).ok_or_else(|| {
                    ChangelogError::DiffLocationNotFound(
                        "added line has no preceding line".to_string(),
                    )
                });
            }
            line_number = Some(counted + 1);
        }
    }

    let reason = if !in_changelog_diff {
        "diff does not touch the changelog"
    } else if line_number.is_none() {
        "changelog diff has no hunk marker"
    } else {
        "changelog diff has no added line"
    };
    Err(ChangelogError::DiffLocationNotFound(reason.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIFF: &str = "\
diff --git a/CHANGELOG.md b/CHANGELOG.md
index 4cc8b20..4db09ef 100644
--- a/CHANGELOG.md
+++ b/CHANGELOG.md
@@ -10,3 +10,4 @@
 ## [1.1.0]
 ### Dependencies
 - Bumps `serde` from 1.0.100 to 1.0.150 ([#1150](https://github.com/acme/app/pull/1150))
+- Bumps `tokio` from 1.28.0 to 1.29.0 ([#1201](https://github.com/acme/app/pull/1201))
";

    #[test]
    fn test_counts_context_lines_from_hunk_start() {
        // Hunk starts at line 10 with three context lines before the
        // addition, so the preceding entry sits at line 12
        assert_eq!(entry_line_from_diff(DIFF).unwrap(), 12);
    }

    #[test]
    fn test_honors_hunk_start_of_later_hunks() {
        let diff = "\
diff --git a/CHANGELOG.md b/CHANGELOG.md
--- a/CHANGELOG.md
+++ b/CHANGELOG.md
@@ -3,2 +3,2 @@
 ## [1.2.0]
 ### Added
@@ -24,2 +24,3 @@
 ### Dependencies
 - An old entry
+- A new entry
";
        assert_eq!(entry_line_from_diff(diff).unwrap(), 25);
    }

    #[test]
    fn test_skips_diffs_of_other_files() {
        let diff = "\
diff --git a/src/lib.rs b/src/lib.rs
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -1,2 +1,3 @@
 fn main() {
+    run();
diff --git a/CHANGELOG.md b/CHANGELOG.md
--- a/CHANGELOG.md
+++ b/CHANGELOG.md
@@ -10,3 +10,4 @@
 ## [1.1.0]
 ### Dependencies
 - An old entry
+- A new entry
";
        assert_eq!(entry_line_from_diff(diff).unwrap(), 12);
    }

    #[test]
    fn test_stops_at_the_next_file_diff() {
        let diff = "\
diff --git a/CHANGELOG.md b/CHANGELOG.md
--- a/CHANGELOG.md
+++ b/CHANGELOG.md
diff --git a/src/lib.rs b/src/lib.rs
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -1,2 +1,3 @@
 fn main() {
+    run();
";
        let result = entry_line_from_diff(diff);

        assert!(matches!(
            result,
            Err(ChangelogError::DiffLocationNotFound(_))
        ));
    }

    #[test]
    fn test_rejects_diff_without_changelog() {
        let diff = "\
diff --git a/src/lib.rs b/src/lib.rs
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -1,2 +1,3 @@
 fn main() {
+    run();
";
        let result = entry_line_from_diff(diff);

        assert!(matches!(
            result,
            Err(ChangelogError::DiffLocationNotFound(_))
        ));
    }

    #[test]
    fn test_rejects_changelog_diff_without_additions() {
        let diff = "\
diff --git a/CHANGELOG.md b/CHANGELOG.md
--- a/CHANGELOG.md
+++ b/CHANGELOG.md
@@ -10,3 +10,2 @@
 ## [1.1.0]
 ### Dependencies
-- A removed entry
";
        let result = entry_line_from_diff(diff);

        assert!(matches!(
            result,
            Err(ChangelogError::DiffLocationNotFound(_))
        ));
    }

    #[test]
    fn test_empty_diff_is_rejected() {
        assert!(entry_line_from_diff("").is_err());
    }
}
