use crate::constants::DEFAULT_USERS;
use crate::db::tables::DbTable;
use crate::helpers::get_timestamp_string;
use nullnet_liberror::{location, Error, ErrorHandler, Location};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex};

const TABLE: DbTable = DbTable::Users;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: String,
}

#[derive(Debug, Clone)]
pub struct UserStore {
    conn: Arc<Mutex<Connection>>,
    bcrypt_cost: u32,
}

impl UserStore {
    pub fn new(conn: Arc<Mutex<Connection>>, bcrypt_cost: u32) -> Self {
        Self { conn, bcrypt_cost }
    }

    /// Returns `None` if the username is already taken.
    pub fn create_user(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<Option<User>, Error> {
        let password_hash = bcrypt::hash(password, self.bcrypt_cost).handle_err(location!())?;
        let user = User {
            username: username.to_string(),
            password_hash,
            role: role.to_string(),
            created_at: get_timestamp_string(),
        };

        let table = TABLE.to_str();
        let inserted = self
            .conn
            .lock()
            .handle_err(location!())?
            .execute(
                &format!(
                    "INSERT OR IGNORE INTO {table} (username, password_hash, role, created_at)
                     VALUES (?1, ?2, ?3, ?4);"
                ),
                params![user.username, user.password_hash, user.role, user.created_at],
            )
            .handle_err(location!())?;

        if inserted == 0 {
            log::warn!("User '{username}' already exists");
            return Ok(None);
        }
        log::info!("Created user '{username}' with role '{role}'");
        Ok(Some(user))
    }

    pub fn get_user(&self, username: &str) -> Result<Option<User>, Error> {
        let table = TABLE.to_str();
        self.conn
            .lock()
            .handle_err(location!())?
            .query_row(
                &format!(
                    "SELECT username, password_hash, role, created_at FROM {table} WHERE username = ?1;"
                ),
                params![username],
                |row| {
                    Ok(User {
                        username: row.get(0)?,
                        password_hash: row.get(1)?,
                        role: row.get(2)?,
                        created_at: row.get(3)?,
                    })
                },
            )
            .optional()
            .handle_err(location!())
    }

    /// Returns the user only if it exists and the password matches.
    pub fn verify_user(&self, username: &str, password: &str) -> Result<Option<User>, Error> {
        let Some(user) = self.get_user(username)? else {
            return Ok(None);
        };
        let valid = bcrypt::verify(password, &user.password_hash).handle_err(location!())?;
        Ok(valid.then_some(user))
    }

    pub fn count(&self) -> Result<u64, Error> {
        let table = TABLE.to_str();
        self.conn
            .lock()
            .handle_err(location!())?
            .query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
                row.get(0)
            })
            .handle_err(location!())
    }

    /// Creates the default accounts when no user exists yet.
    pub fn seed_default_users(&self) -> Result<(), Error> {
        if self.count()? > 0 {
            return Ok(());
        }
        for (username, password, role) in DEFAULT_USERS {
            self.create_user(username, password, role)?;
        }
        log::warn!("Seeded default accounts; change their passwords for production use");
        Ok(())
    }
}
