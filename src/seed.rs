//! Startup user seeding from a directory of JSON files.
//!
//! Each file holds `{"email": "...", "password": "..."}`; passwords are
//! hashed before they reach the store, and existing users are upserted
//! by email.

use crate::auth;
use crate::db::JourneyStore;
use crate::error::JourneyError;
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub email: String,
    pub password: String,
}

/// Load seed JSON files from a directory.
pub fn load_from_dir(dir: &Path) -> Result<Vec<SeedUser>, JourneyError> {
    if !dir.exists() {
        info!(path = %dir.display(), "seed directory not found; skipping load");
        return Ok(Vec::new());
    }

    let loaded: Vec<SeedUser> = fs::read_dir(dir)?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                let err: JourneyError = e.into();
                warn!(error = %err, "failed to read seed dir entry");
                None
            }
        })
        .filter(|path| is_json_file(path))
        .filter_map(|path| {
            load_seed_user(&path)
                .inspect_err(|e| {
                    warn!(path = %path.display(), error = %e, "failed to load seed user");
                })
                .ok()
        })
        .collect();

    Ok(loaded)
}

/// Hash and upsert the loaded users. Returns how many were applied.
pub async fn apply(store: &JourneyStore, users: Vec<SeedUser>) -> Result<usize, JourneyError> {
    let mut applied = 0;
    for user in users {
        let hash = auth::hash_password(&user.password)?;
        store.upsert_user(&user.email, &hash).await?;
        applied += 1;
    }
    Ok(applied)
}

fn is_json_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        == Some(true)
}

fn load_seed_user(path: &Path) -> Result<SeedUser, JourneyError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> std::path::PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();
        let mut dir = std::env::temp_dir();
        dir.push(format!("journey-seed-{}-{}-{}", tag, std::process::id(), nanos));
        fs::create_dir_all(&dir).expect("create temp seed dir");
        dir
    }

    #[test]
    fn loads_json_files_and_skips_the_rest() {
        let dir = temp_dir("load");
        fs::write(
            dir.join("alice.json"),
            r#"{"email": "alice@example.com", "password": "pw1"}"#,
        )
        .unwrap();
        fs::write(dir.join("readme.txt"), "not a seed").unwrap();
        fs::write(dir.join("broken.json"), "{").unwrap();

        let users = load_from_dir(&dir).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "alice@example.com");
    }

    #[test]
    fn missing_directory_is_empty_not_an_error() {
        let mut dir = std::env::temp_dir();
        dir.push("journey-seed-definitely-missing");
        assert!(load_from_dir(&dir).unwrap().is_empty());
    }
}
