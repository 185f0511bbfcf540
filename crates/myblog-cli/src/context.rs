use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use myblog_api::ApiClient;
use myblog_session::{Config, SessionProvider, TokenStore, resolve_data_path};

/// Everything a command handler needs: resolved data directory, loaded
/// config (with any CLI override applied), the API client, and the shared
/// session provider.
pub struct AppContext {
    pub data_dir: PathBuf,
    pub config: Config,
    pub api: ApiClient,
    pub session: Arc<SessionProvider>,
}

impl AppContext {
    pub fn from_cli(data_dir: Option<&str>, api_url: Option<&str>) -> Result<Self> {
        let data_dir = resolve_data_path(data_dir)?;
        let mut config = Config::load_from(&Config::path_in(&data_dir))?;
        if let Some(url) = api_url {
            config.api_base_url = url.to_string();
        }

        let api = ApiClient::new(config.api_base_url.clone());
        let session = Arc::new(SessionProvider::new(TokenStore::new(&data_dir)));

        Ok(Self {
            data_dir,
            config,
            api,
            session,
        })
    }
}
