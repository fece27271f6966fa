use std::path::PathBuf;
use todo_core::{AppConfig, TodoResult};
use todo_domain::{HistoryController, PresentationPort};
use todo_persistence::{FileKeyValueStore, TaskListGateway};

pub type FileGateway = TaskListGateway<FileKeyValueStore>;

/// Where the list lives, resolved from flags, env, and the config file.
pub struct CliContext {
    pub config: AppConfig,
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl CliContext {
    pub fn load(data_dir: Option<PathBuf>, key: Option<String>) -> TodoResult<Self> {
        Self::from_config(AppConfig::load(), data_dir, key)
    }

    pub fn from_config(
        config: AppConfig,
        data_dir: Option<PathBuf>,
        key: Option<String>,
    ) -> TodoResult<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => config.effective_data_dir()?,
        };
        let storage_key = key.unwrap_or_else(|| config.effective_storage_key().to_string());
        tracing::debug!("Using '{}' in {}", storage_key, data_dir.display());

        Ok(Self {
            config,
            data_dir,
            storage_key,
        })
    }

    pub fn gateway(&self) -> FileGateway {
        TaskListGateway::with_key(FileKeyValueStore::new(&self.data_dir), &self.storage_key)
    }

    pub fn open<P: PresentationPort>(
        &self,
        presenter: P,
    ) -> TodoResult<HistoryController<FileGateway, P>> {
        HistoryController::open(self.gateway(), presenter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/from/config")),
            storage_key: Some("work".to_string()),
            ..AppConfig::default()
        };

        let ctx = CliContext::from_config(
            config.clone(),
            Some(PathBuf::from("/from/flag")),
            None,
        )
        .unwrap();
        assert_eq!(ctx.data_dir, PathBuf::from("/from/flag"));
        assert_eq!(ctx.storage_key, "work");

        let ctx = CliContext::from_config(config, None, Some("home".to_string())).unwrap();
        assert_eq!(ctx.data_dir, PathBuf::from("/from/config"));
        assert_eq!(ctx.storage_key, "home");
    }
}
