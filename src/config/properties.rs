//! Properties file handling
//!
//! The listener is configured through a flat `key=value` properties file.
//! Unknown keys are kept verbatim so a file shared with other tooling
//! survives a load/save round trip.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{ListenerError, Result};

/// A parsed properties file
#[derive(Debug, Clone, Default)]
pub struct Properties {
    properties: BTreeMap<String, String>,
}

impl Properties {
    /// Create an empty property set
    pub fn new() -> Self {
        Self::default()
    }

    /// Load properties from a file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Err(ListenerError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Properties file not found: {}", path.as_ref().display()),
            )));
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut properties = BTreeMap::new();

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                properties.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Ok(Self { properties })
    }

    /// Load properties from a file, falling back to defaults if absent
    pub fn load_from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::new())
        }
    }

    /// Save properties to a file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "# Prism listener properties")?;
        for (key, value) in &self.properties {
            writeln!(writer, "{}={}", key, value)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Get a property value
    pub fn get(&self, key: &str) -> Option<&String> {
        self.properties.get(key)
    }

    /// Set a property value
    pub fn set(&mut self, key: &str, value: &str) {
        self.properties.insert(key.to_string(), value.to_string());
    }

    /// Get a boolean property, with a default for absent keys
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key)
            .map(|value| value == "true" || value == "1")
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let dir = std::env::temp_dir().join("prism-properties-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("listener.properties");
        std::fs::write(
            &path,
            "# comment\n\nlisten-address=0.0.0.0:19133\ntransport = quic\nclient-cache=false\n",
        )
        .unwrap();

        let properties = Properties::load_from_file(&path).unwrap();
        assert_eq!(
            properties.get("listen-address"),
            Some(&"0.0.0.0:19133".to_string())
        );
        assert_eq!(properties.get("transport"), Some(&"quic".to_string()));
        assert!(!properties.get_bool("client-cache", true));
        assert!(properties.get_bool("missing", true));

        std::fs::remove_file(&path).unwrap();
    }
}
