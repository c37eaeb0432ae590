use crate::config::Config;
use crate::db::{open_db, DeviceStore, UserStore};
use crate::sessions::Sessions;
use nullnet_liberror::Error;

#[derive(Debug, Clone)]
pub struct AppContext {
    pub devices: DeviceStore,
    pub users: UserStore,
    pub sessions: Sessions,
    pub config: Config,
}

impl AppContext {
    pub fn new(db_path: &str, config: Config) -> Result<Self, Error> {
        let conn = open_db(db_path)?;

        let users = UserStore::new(conn.clone(), config.bcrypt_cost);
        users.seed_default_users()?;

        log::info!(
            "Loaded configuration: {}",
            serde_json::to_string(&config).unwrap_or_default()
        );

        Ok(Self {
            devices: DeviceStore::new(conn),
            users,
            sessions: Sessions::new(config.session_ttl()),
            config,
        })
    }
}
