use crate::error::JourneyError;
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

/// Storage key for the session token, kept from the original deployment.
pub const TOKEN_KEY: &str = "journey:token";

/// Single-key persistent store, the stand-in for browser local storage:
/// a JSON object on disk holding the opaque token under [`TOKEN_KEY`].
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the stored token, if any. A missing file means logged-out.
    pub fn load(&self) -> Result<Option<String>, JourneyError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let map: Map<String, Value> = serde_json::from_str(&contents)?;
        Ok(map
            .get(TOKEN_KEY)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    /// Persist the token verbatim.
    pub fn save(&self, token: &str) -> Result<(), JourneyError> {
        let mut map = Map::new();
        map.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        fs::write(&self.path, serde_json::to_string(&map)?)?;
        Ok(())
    }

    /// Remove the stored token. Absence is not an error.
    pub fn clear(&self) -> Result<(), JourneyError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("journey-token-{}-{}-{}.json", tag, std::process::id(), nanos));
        path
    }

    #[test]
    fn roundtrips_the_token_verbatim() {
        let store = TokenStore::new(temp_path("roundtrip"));
        assert_eq!(store.load().unwrap(), None);

        store.save("  weird token with spaces  ").unwrap();
        assert_eq!(
            store.load().unwrap().as_deref(),
            Some("  weird token with spaces  ")
        );
    }

    #[test]
    fn clear_is_idempotent() {
        let store = TokenStore::new(temp_path("clear"));
        store.clear().unwrap();

        store.save("tok").unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }
}
