use crate::db::tables::DbTable;
use nullnet_liberror::{location, Error, ErrorHandler, Location};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub mod devices;
pub mod tables;
pub mod users;

pub use devices::{AddDeviceError, DeviceStore};
pub use users::{User, UserStore};

/// Opens the database at `path` (`:memory:` for a private in-memory one) and
/// creates the tables that are missing.
pub fn open_db(path: &str) -> Result<Arc<Mutex<Connection>>, Error> {
    let conn = Connection::open(path).handle_err(location!())?;
    for table in DbTable::ALL {
        conn.execute_batch(&table.sql_create())
            .handle_err(location!())?;
    }
    log::info!("Opened database at '{path}'");
    Ok(Arc::new(Mutex::new(conn)))
}
