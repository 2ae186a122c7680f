use std::collections::BTreeMap;
use std::path::Path;

const BUILTIN: &str = include_str!("../../capacity.yml");
const SERVICE_SUFFIXES: &[&str] = &[".elasticsearch", ".search"];

#[derive(Debug, thiserror::Error)]
pub enum CapacityError {
    #[error("reading capacity table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing capacity table: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("capacity for '{0}' must be greater than zero")]
    Zero(String),
}

/// Instance type to fixed per-node storage (GB) for instance-store domains.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CapacityTable {
    entries: BTreeMap<String, u32>,
}

impl CapacityTable {
    pub fn builtin() -> Result<Self, CapacityError> {
        Self::from_yaml(BUILTIN)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, CapacityError> {
        let raw: BTreeMap<String, u32> = serde_yaml::from_str(yaml)?;
        let mut entries = BTreeMap::new();
        for (instance_type, gb) in raw {
            if gb == 0 {
                return Err(CapacityError::Zero(instance_type));
            }
            entries.insert(family_key(&instance_type).to_string(), gb);
        }
        Ok(Self { entries })
    }

    pub fn load_file(path: &Path) -> Result<Self, CapacityError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CapacityError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    /// Built-in table with `overrides` layered on top.
    pub fn with_overrides(overrides: Option<&Path>) -> Result<Self, CapacityError> {
        let mut table = Self::builtin()?;
        if let Some(path) = overrides {
            table.merge(Self::load_file(path)?);
        }
        Ok(table)
    }

    pub fn merge(&mut self, other: CapacityTable) {
        self.entries.extend(other.entries);
    }

    pub fn lookup(&self, instance_type: &str) -> Option<u32> {
        self.entries.get(family_key(instance_type)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

fn family_key(instance_type: &str) -> &str {
    let trimmed = instance_type.trim();
    SERVICE_SUFFIXES
        .iter()
        .find_map(|suffix| trimmed.strip_suffix(suffix))
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_parses() {
        let table = CapacityTable::builtin().unwrap();
        assert_eq!(table.iter().count(), 17);
        assert_eq!(table.lookup("m3.large"), Some(32));
    }

    #[test]
    fn suffixes_are_normalized() {
        let table = CapacityTable::builtin().unwrap();
        assert_eq!(table.lookup("r3.large.elasticsearch"), Some(32));
        assert_eq!(table.lookup("r3.large.search"), Some(32));
        assert_eq!(table.lookup("i2.2xlarge.elasticsearch"), Some(1600));
    }

    #[test]
    fn unknown_type_is_none() {
        let table = CapacityTable::builtin().unwrap();
        assert_eq!(table.lookup("r6gd.large.search"), None);
    }

    #[test]
    fn overrides_extend_and_replace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capacity.yml");
        std::fs::write(&path, "r6gd.large.search: 118\nm3.large: 40\n").unwrap();

        let table = CapacityTable::with_overrides(Some(&path)).unwrap();
        assert_eq!(table.lookup("r6gd.large.elasticsearch"), Some(118));
        assert_eq!(table.lookup("m3.large.search"), Some(40));
        assert_eq!(table.lookup("i3.large"), Some(475));
    }

    #[test]
    fn zero_capacity_rejected() {
        let err = CapacityTable::from_yaml("m5.large: 0\n").unwrap_err();
        assert!(err.to_string().contains("m5.large"));
    }

    #[test]
    fn missing_override_file_fails() {
        let err = CapacityTable::with_overrides(Some(Path::new("/nonexistent/capacity.yml")))
            .unwrap_err();
        assert!(matches!(err, CapacityError::Io { .. }));
    }
}
