//! Minimal view of the front-end's package.json

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// The package.json keys deskpack cares about
#[derive(Debug, Default, Deserialize)]
pub struct PackageJson {
    pub name: Option<String>,

    #[serde(rename = "productName")]
    pub product_name: Option<String>,
}

impl PackageJson {
    /// Read `<source>/package.json`, returning `None` when it is absent or unreadable
    pub fn read(source: &Path) -> Option<Self> {
        let path = source.join("package.json");
        let content = fs::read_to_string(&path).ok()?;
        match serde_json::from_str(&content) {
            Ok(package) => Some(package),
            Err(e) => {
                tracing::warn!("ignoring malformed {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Application name the packager would pick: `productName`, then `name`
    pub fn app_name(&self) -> Option<&str> {
        self.product_name
            .as_deref()
            .or(self.name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_product_name_wins_over_name() {
        let package: PackageJson =
            serde_json::from_str(r#"{"name": "front-page", "productName": "Front Page"}"#)
                .unwrap();
        assert_eq!(package.app_name(), Some("Front Page"));
    }

    #[test]
    fn test_name_used_without_product_name() {
        let package: PackageJson =
            serde_json::from_str(r#"{"name": "frontpage", "version": "1.0.0"}"#).unwrap();
        assert_eq!(package.app_name(), Some("frontpage"));
    }

    #[test]
    fn test_blank_names_are_ignored() {
        let package: PackageJson = serde_json::from_str(r#"{"productName": " "}"#).unwrap();
        assert_eq!(package.app_name(), None);
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(PackageJson::read(temp.path()).is_none());
    }

    #[test]
    fn test_read_malformed_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("package.json"), "{ not json").unwrap();
        assert!(PackageJson::read(temp.path()).is_none());
    }
}
