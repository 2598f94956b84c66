use anyhow::{bail, Result};
use git2::Repository;

/// Url of the `origin` remote of the repository in the current directory.
pub fn remote_url() -> Result<String> {
    let repo = Repository::open(".")?;

    let remote = repo.find_remote("origin")?;

    match remote.url() {
        Some(url) => Ok(url.to_owned()),
        None => bail!("remote 'origin' has no valid utf-8 url"),
    }
}

/// Extracts `owner/repo` from a git remote url.
///
/// Supports the ssh form `git@host:owner/repo.git` and the https form
/// `https://host/owner/repo.git`, with or without the `.git` suffix.
pub fn parse_owner_repo(url: &str) -> Option<String> {
    let url = url.trim().trim_end_matches('/');
    let url = url.strip_suffix(".git").unwrap_or(url);

    let path = match url.split_once('@') {
        Some((_, rest)) => rest.split_once(':').map(|(_, path)| path).unwrap_or(rest),
        None => url,
    };

    let mut segments = path.rsplit('/');
    let repo = segments.next()?;
    let owner = segments.next()?;

    if owner.is_empty() || repo.is_empty() || owner.contains(':') {
        return None;
    }

    Some(format!("{}/{}", owner, repo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::Repository;
    use tempdir::TempDir;

    #[test]
    fn parses_ssh_remote() {
        assert_eq!(
            parse_owner_repo("git@github.com:octocat/hello-world.git"),
            Some("octocat/hello-world".to_owned())
        );
    }

    #[test]
    fn parses_ssh_remote_without_suffix() {
        assert_eq!(
            parse_owner_repo("git@github.com:octocat/hello-world"),
            Some("octocat/hello-world".to_owned())
        );
    }

    #[test]
    fn parses_https_remote() {
        assert_eq!(
            parse_owner_repo("https://github.com/octocat/hello-world.git"),
            Some("octocat/hello-world".to_owned())
        );
    }

    #[test]
    fn parses_https_remote_without_suffix() {
        assert_eq!(
            parse_owner_repo("https://github.com/octocat/hello-world"),
            Some("octocat/hello-world".to_owned())
        );
    }

    #[test]
    fn rejects_url_without_two_segments() {
        assert_eq!(parse_owner_repo("git@github.com:hello-world.git"), None);
    }

    #[test]
    fn reads_origin_remote_url() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("git")?;

        let repo = Repository::init(dir.path())?;
        repo.remote("origin", "git@github.com:octocat/hello-world.git")?;

        std::env::set_current_dir(dir.path())?;

        let url = remote_url()?;

        assert_eq!(url, "git@github.com:octocat/hello-world.git");
        assert_eq!(
            parse_owner_repo(&url),
            Some("octocat/hello-world".to_owned())
        );

        dir.close()?;

        Ok(())
    }
}
