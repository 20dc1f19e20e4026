use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let config = AppConfig::get();
    debug!(
        "Environment: {}, storage backend: {}",
        config.app.environment, config.storage.backend
    );

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend '{}' initialized", config.storage.backend);

    Ok(StartupContext { storage })
}
