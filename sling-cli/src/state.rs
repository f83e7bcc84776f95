//! Location of the CLI's state directory (config lives here)

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

/// Overrides `~/.sling` when set and non-empty
pub const SLING_HOME_VAR: &str = "SLING_HOME";

/// `$SLING_HOME`, else `$HOME/.sling`.
pub fn sling_home() -> Result<PathBuf> {
    resolve_home(
        std::env::var(SLING_HOME_VAR).ok(),
        std::env::var("HOME").ok(),
    )
}

fn resolve_home(sling_home: Option<String>, home: Option<String>) -> Result<PathBuf> {
    if let Some(dir) = sling_home.filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    match home.filter(|h| !h.trim().is_empty()) {
        Some(h) => Ok(PathBuf::from(h).join(".sling")),
        None => bail!("neither {SLING_HOME_VAR} nor HOME is set"),
    }
}

pub fn ensure_sling_home() -> Result<PathBuf> {
    let dir = sling_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let dir = resolve_home(Some("/tmp/sling-state".into()), Some("/home/jo".into())).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/sling-state"));
    }

    #[test]
    fn test_falls_back_to_home() {
        let dir = resolve_home(None, Some("/home/jo".into())).unwrap();
        assert_eq!(dir, PathBuf::from("/home/jo/.sling"));

        let dir = resolve_home(Some("  ".into()), Some("/home/jo".into())).unwrap();
        assert_eq!(dir, PathBuf::from("/home/jo/.sling"));
    }

    #[test]
    fn test_no_home_is_an_error() {
        let err = resolve_home(None, None).unwrap_err();
        assert!(err.to_string().contains(SLING_HOME_VAR));
    }
}
