//! JSON file persistence for a budget
//!
//! A single pretty-printed JSON document holds the whole [`BudgetData`].
//! Writes go to a temp file in the same directory which is then renamed
//! over the target, so a crash mid-save never leaves a truncated file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::BudgetData;

/// Budget file on disk
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the budget; a missing file yields an empty budget
    pub fn load(&self) -> Result<BudgetData> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No budget file yet, starting empty");
            return Ok(BudgetData::default());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(BudgetData::default());
        }
        let data: BudgetData = serde_json::from_str(&content).map_err(|e| {
            Error::InvalidData(format!(
                "Failed to parse budget file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        info!(
            path = %self.path.display(),
            expenses = data.expenses.len(),
            goals = data.goals.len(),
            "Loaded budget"
        );
        Ok(data)
    }

    /// Atomically replace the file with `data`
    pub fn save(&self, data: &BudgetData) -> Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let json = serde_json::to_string_pretty(data)?;
        let mut temp = NamedTempFile::new_in(&dir)?;
        temp.write_all(json.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        info!(path = %self.path.display(), "Saved budget");
        Ok(())
    }

    /// Remove the file if present
    pub fn delete(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            info!(path = %self.path.display(), "Deleted budget file");
        }
        Ok(())
    }
}

/// Default budget file location
pub fn default_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("budgie")
        .join("budget.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IncomeConfig, IncomeType};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path().join("budget.json"));
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), BudgetData::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path().join("nested").join("budget.json"));

        let mut data = BudgetData::default();
        data.set_income(IncomeConfig::new(IncomeType::Biweekly, 1600.0))
            .unwrap();
        store.save(&data).unwrap();

        assert!(store.exists());
        assert_eq!(store.load().unwrap(), data);

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"type\": \"biweekly\""));
    }

    #[test]
    fn test_corrupt_file_is_invalid_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("budget.json");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonStore::open(&path);
        assert!(matches!(store.load(), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_unknown_tags_load_leniently() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("budget.json");
        fs::write(
            &path,
            r#"{
                "income": {"type": "weekly", "amount": 500},
                "expenses": [{"id": "1", "name": "Gym", "amount": 40, "category": "fitness", "frequency": "monthly"}],
                "goals": [{"id": "g", "name": "Trip", "targetAmount": 2000, "currentAmount": 100,
                           "targetDate": "2027-06-01", "category": "travel", "priority": "asap"}]
            }"#,
        )
        .unwrap();

        let data = JsonStore::open(&path).load().unwrap();
        assert!(data.income.is_none());
        assert_eq!(data.expenses.len(), 1);
        assert_eq!(data.goals.len(), 1);
        assert_eq!(data.snapshot().monthly_income, 0.0);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path().join("budget.json"));
        store.save(&BudgetData::default()).unwrap();
        store.delete().unwrap();
        store.delete().unwrap();
        assert!(!store.exists());
    }
}
