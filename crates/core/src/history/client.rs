//! History query adapters.
//!
//! Both backends return the same text shape: one `name  -  email` line per
//! distinct author pair, deduplicated and sorted by byte order.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use git2::{Commit, ErrorCode, Mailmap, Repository};
use tracing::{debug, info, instrument, warn};

use super::parser::DELIMITER;
use crate::errors::HistoryError;

/// Source of raw authorship history text.
pub trait AuthorHistory {
    /// Return every distinct `name  -  email` line of the history, sorted.
    fn fetch_author_history(&self) -> Result<String, HistoryError>;
}

/// Fixed history text, used when the caller already holds the log output.
impl AuthorHistory for String {
    fn fetch_author_history(&self) -> Result<String, HistoryError> {
        Ok(self.clone())
    }
}

// ---------------------------------------------------------------------------
// git CLI
// ---------------------------------------------------------------------------

/// Reads history by running `git log` in a working directory.
#[derive(Debug, Clone)]
pub struct GitCliHistory {
    repo_path: PathBuf,
}

impl GitCliHistory {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    /// True when `repo_path` is a repository whose HEAD has no commits yet.
    fn head_is_unborn(&self) -> Result<bool, HistoryError> {
        if self.run_git(&["rev-parse", "--git-dir"]).is_err() {
            return Err(HistoryError::RepositoryNotFound(
                self.repo_path.display().to_string(),
            ));
        }
        Ok(self
            .run_git(&["rev-parse", "--verify", "--quiet", "HEAD"])
            .is_err())
    }

    fn run_git(&self, args: &[&str]) -> Result<String, HistoryError> {
        let mut cmd = Command::new("git");
        cmd.current_dir(&self.repo_path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        debug!(cmd = ?format!("git {}", args.join(" ")), "running git command");
        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HistoryError::BinaryNotFound("git".into())
            } else {
                HistoryError::IoError(e)
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let exit_code = output.status.code().unwrap_or(-1);
            return Err(HistoryError::CommandFailed { exit_code, stderr });
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl AuthorHistory for GitCliHistory {
    #[instrument(skip(self), fields(path = %self.repo_path.display()))]
    fn fetch_author_history(&self) -> Result<String, HistoryError> {
        if !self.repo_path.is_dir() {
            return Err(HistoryError::RepositoryNotFound(
                self.repo_path.display().to_string(),
            ));
        }

        let format = format!("--format=%aN{}%aE", DELIMITER);
        match self.run_git(&["log", &format]) {
            Ok(output) => {
                let text = sorted_unique_lines(output.lines().map(str::to_string));
                info!(bytes = text.len(), "read author history via git log");
                Ok(text)
            }
            Err(HistoryError::CommandFailed { exit_code, stderr }) => {
                if self.head_is_unborn()? {
                    info!("repository has no commits yet");
                    return Ok(String::new());
                }
                warn!(exit_code, %stderr, "git log failed");
                Err(HistoryError::CommandFailed { exit_code, stderr })
            }
            Err(e) => Err(e),
        }
    }
}

// ---------------------------------------------------------------------------
// libgit2
// ---------------------------------------------------------------------------

/// Reads history in-process through `git2`, honouring the repository mailmap.
#[derive(Debug, Clone)]
pub struct Git2History {
    repo_path: PathBuf,
}

impl Git2History {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }
}

impl AuthorHistory for Git2History {
    #[instrument(skip(self), fields(path = %self.repo_path.display()))]
    fn fetch_author_history(&self) -> Result<String, HistoryError> {
        let repo = Repository::discover(&self.repo_path)
            .map_err(|_| HistoryError::RepositoryNotFound(self.repo_path.display().to_string()))?;

        match repo.head() {
            Ok(_) => {}
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                info!("repository has no commits yet");
                return Ok(String::new());
            }
            Err(e) => return Err(e.into()),
        }

        let mailmap = repo.mailmap()?;
        let mut revwalk = repo.revwalk()?;
        revwalk.push_head()?;

        let mut lines = Vec::new();
        let mut commits = 0usize;
        for oid_result in revwalk {
            let commit = repo.find_commit(oid_result?)?;
            let (name, email) = mailmapped_author(&commit, &mailmap);
            lines.push(format!("{}{}{}", name, DELIMITER, email));
            commits += 1;
        }
        debug!(commits, "walked commits");

        let text = sorted_unique_lines(lines);
        info!(bytes = text.len(), "read author history via git2");
        Ok(text)
    }
}

/// The commit author as `%aN`/`%aE` would print it.
///
/// libgit2 cannot build a signature with an empty name or email, so such
/// authors are reported as recorded, without mailmap resolution.
fn mailmapped_author(commit: &Commit<'_>, mailmap: &Mailmap) -> (String, String) {
    let raw = commit.author();
    let name = String::from_utf8_lossy(raw.name_bytes()).into_owned();
    let email = String::from_utf8_lossy(raw.email_bytes()).into_owned();
    if name.is_empty() || email.is_empty() {
        return (name, email);
    }
    match commit.author_with_mailmap(mailmap) {
        Ok(mapped) => (
            String::from_utf8_lossy(mapped.name_bytes()).into_owned(),
            String::from_utf8_lossy(mapped.email_bytes()).into_owned(),
        ),
        Err(e) => {
            debug!(sha = %commit.id(), error = %e, "mailmap lookup failed, using raw author");
            (name, email)
        }
    }
}

/// Deduplicate and byte-sort lines, dropping empty ones (`sort -u` under the
/// C locale).
fn sorted_unique_lines<I>(lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let unique: BTreeSet<String> = lines.into_iter().filter(|l| !l.is_empty()).collect();
    let mut text = String::new();
    for line in unique {
        text.push_str(&line);
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_unique_lines() {
        let lines = vec![
            "b  -  2".to_string(),
            "a  -  1".to_string(),
            String::new(),
            "b  -  2".to_string(),
            "B  -  3".to_string(),
        ];
        assert_eq!(
            sorted_unique_lines(lines),
            "B  -  3\na  -  1\nb  -  2\n"
        );
    }

    #[test]
    fn test_sorted_unique_lines_empty() {
        assert_eq!(sorted_unique_lines(Vec::new()), "");
    }

    #[test]
    fn test_str_fixture_history() {
        let fixture = "brl  -  b@x.com\n".to_string();
        assert_eq!(fixture.fetch_author_history().unwrap(), fixture);
    }

    #[test]
    fn test_cli_missing_directory() {
        let history = GitCliHistory::new("/nonexistent/authorgen/repo");
        assert!(matches!(
            history.fetch_author_history(),
            Err(HistoryError::RepositoryNotFound(_))
        ));
    }

    #[test]
    fn test_git2_missing_directory() {
        let history = Git2History::new("/nonexistent/authorgen/repo");
        assert!(matches!(
            history.fetch_author_history(),
            Err(HistoryError::RepositoryNotFound(_))
        ));
    }

    /// Write a commit object directly, bypassing signature validation, and
    /// detach HEAD onto it.
    fn write_raw_commit(repo: &Repository, author: &str) {
        let tree = repo.treebuilder(None).unwrap().write().unwrap();
        let body = format!(
            "tree {}\nauthor {} 1700000000 +0000\ncommitter {} 1700000000 +0000\n\nchange\n",
            tree, author, author
        );
        let oid = repo
            .odb()
            .unwrap()
            .write(git2::ObjectType::Commit, body.as_bytes())
            .unwrap();
        repo.set_head_detached(oid).unwrap();
    }

    #[test]
    fn test_git2_author_without_email() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        write_raw_commit(&repo, "No Mail <>");

        let history = Git2History::new(dir.path());
        assert_eq!(history.fetch_author_history().unwrap(), "No Mail  -  \n");
    }

    #[test]
    fn test_git2_author_without_email_skips_mailmap() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        write_raw_commit(&repo, "No Mail <>");
        std::fs::write(
            dir.path().join(".mailmap"),
            "Someone Else <else@x.com> <other@x.com>\n",
        )
        .unwrap();

        let history = Git2History::new(dir.path());
        assert_eq!(history.fetch_author_history().unwrap(), "No Mail  -  \n");
    }

    #[test]
    fn test_git2_unborn_head_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        Repository::init(dir.path()).unwrap();
        let history = Git2History::new(dir.path());
        assert_eq!(history.fetch_author_history().unwrap(), "");
    }
}
