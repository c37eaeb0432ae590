use crate::db::tables::DbTable;
use crate::helpers::{elapsed_since, get_timestamp_string};
use chrono::Utc;
use libbsmart::{Device, DeviceEvent, NO_ALARM};
use nullnet_liberror::{location, Error, ErrorHandler, Location};
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const TABLE: DbTable = DbTable::Devices;

#[derive(Debug)]
pub enum AddDeviceError {
    MissingFields,
    AlreadyExists,
    Storage(Error),
}

impl From<Error> for AddDeviceError {
    fn from(err: Error) -> Self {
        AddDeviceError::Storage(err)
    }
}

#[derive(Debug, Clone)]
pub struct DeviceStore {
    conn: Arc<Mutex<Connection>>,
}

impl DeviceStore {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    pub fn all_devices(&self) -> Result<Vec<Device>, Error> {
        let table = TABLE.to_str();
        let conn = self.conn.lock().handle_err(location!())?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT id, button, battery, last_event, online, location FROM {table} ORDER BY id;"
            ))
            .handle_err(location!())?;
        let devices = stmt
            .query_map([], device_from_row)
            .handle_err(location!())?
            .collect::<Result<Vec<Device>, _>>()
            .handle_err(location!())?;
        Ok(devices)
    }

    pub fn insert_device(&self, id: &str, location: &str) -> Result<(), AddDeviceError> {
        let (id, location) = (id.trim(), location.trim());
        if id.is_empty() || location.is_empty() {
            return Err(AddDeviceError::MissingFields);
        }

        let table = TABLE.to_str();
        let conn = self.conn.lock().handle_err(location!())?;
        let inserted = conn
            .execute(
                &format!(
                    "INSERT OR IGNORE INTO {table} (id, button, battery, last_event, online, location)
                     VALUES (?1, ?2, 100, ?3, 1, ?4);"
                ),
                params![id, NO_ALARM, get_timestamp_string(), location],
            )
            .handle_err(location!())?;

        if inserted == 0 {
            return Err(AddDeviceError::AlreadyExists);
        }
        log::info!("Device '{id}' added at '{location}'");
        Ok(())
    }

    /// Clears the alarm code of a device. Returns whether the device exists.
    pub fn resolve_alarm(&self, id: &str) -> Result<bool, Error> {
        let table = TABLE.to_str();
        let conn = self.conn.lock().handle_err(location!())?;
        let updated = conn
            .execute(
                &format!("UPDATE {table} SET button = ?1 WHERE id = ?2;"),
                params![NO_ALARM, id],
            )
            .handle_err(location!())?;
        Ok(updated > 0)
    }

    /// Returns whether the device existed.
    pub fn delete_device(&self, id: &str) -> Result<bool, Error> {
        let table = TABLE.to_str();
        let conn = self.conn.lock().handle_err(location!())?;
        let deleted = conn
            .execute(&format!("DELETE FROM {table} WHERE id = ?1;"), params![id])
            .handle_err(location!())?;
        Ok(deleted > 0)
    }

    /// Stores a device event and brings the device back online.
    /// Returns `false` if the device is unknown.
    pub fn record_event(&self, event: &DeviceEvent) -> Result<bool, Error> {
        let table = TABLE.to_str();
        let conn = self.conn.lock().handle_err(location!())?;
        let updated = conn
            .execute(
                &format!(
                    "UPDATE {table} SET button = ?1, battery = ?2, last_event = ?3, online = 1
                     WHERE id = ?4;"
                ),
                params![
                    event.button,
                    event.battery,
                    get_timestamp_string(),
                    event.id
                ],
            )
            .handle_err(location!())?;
        Ok(updated > 0)
    }

    /// Marks offline every online device whose last event is older than `timeout`.
    /// Returns the ids of the devices that went offline.
    pub fn mark_offline(&self, timeout: Duration) -> Result<Vec<String>, Error> {
        let table = TABLE.to_str();
        let now = Utc::now();
        let conn = self.conn.lock().handle_err(location!())?;

        let candidates = {
            let mut stmt = conn
                .prepare(&format!(
                    "SELECT id, last_event FROM {table} WHERE online = 1 AND last_event IS NOT NULL;"
                ))
                .handle_err(location!())?;
            let rows = stmt
                .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))
                .handle_err(location!())?
                .collect::<Result<Vec<(String, String)>, _>>()
                .handle_err(location!())?;
            rows
        };

        let mut offline = Vec::new();
        for (id, last_event) in candidates {
            let Ok(elapsed) = elapsed_since(&last_event, now) else {
                log::warn!("Device '{id}' has an invalid last event timestamp: '{last_event}'");
                continue;
            };
            if elapsed > timeout {
                conn.execute(
                    &format!("UPDATE {table} SET online = 0 WHERE id = ?1;"),
                    params![id],
                )
                .handle_err(location!())?;
                offline.push(id);
            }
        }

        Ok(offline)
    }
}

fn device_from_row(row: &Row) -> rusqlite::Result<Device> {
    Ok(Device {
        id: row.get(0)?,
        button: row.get(1)?,
        battery: row.get(2)?,
        last_event: row.get(3)?,
        online: row.get(4)?,
        location: row.get(5)?,
    })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::db::open_db;

    fn store() -> DeviceStore {
        DeviceStore::new(open_db(":memory:").unwrap())
    }

    fn set_last_event(store: &DeviceStore, id: &str, last_event: &str) {
        store
            .conn
            .lock()
            .unwrap()
            .execute(
                "UPDATE devices SET last_event = ?1 WHERE id = ?2;",
                params![last_event, id],
            )
            .unwrap();
    }

    #[test]
    fn test_insert_device_defaults() {
        let store = store();
        store.insert_device("d1", "Hall").unwrap();

        let devices = store.all_devices().unwrap();
        assert_eq!(devices.len(), 1);
        let d = &devices[0];
        assert_eq!(d.id, "d1");
        assert_eq!(d.location, "Hall");
        assert_eq!(d.button, NO_ALARM);
        assert_eq!(d.battery, 100);
        assert!(d.online);
        assert!(d.last_event.is_some());
    }

    #[test]
    fn test_insert_device_errors() {
        let store = store();
        store.insert_device("d1", "Hall").unwrap();

        assert!(matches!(
            store.insert_device("d1", "Garage"),
            Err(AddDeviceError::AlreadyExists)
        ));
        assert!(matches!(
            store.insert_device("", "Garage"),
            Err(AddDeviceError::MissingFields)
        ));
        assert!(matches!(
            store.insert_device("d2", "  "),
            Err(AddDeviceError::MissingFields)
        ));

        let devices = store.all_devices().unwrap();
        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].location, "Hall");
    }

    #[test]
    fn test_event_then_resolve() {
        let store = store();
        store.insert_device("d1", "Hall").unwrap();

        let event = DeviceEvent {
            id: "d1".to_string(),
            button: 2,
            battery: 41,
        };
        assert!(store.record_event(&event).unwrap());
        let d = store.all_devices().unwrap().remove(0);
        assert_eq!((d.button, d.battery), (2, 41));
        assert!(d.has_alarm());

        assert!(store.resolve_alarm("d1").unwrap());
        let d = store.all_devices().unwrap().remove(0);
        assert_eq!((d.button, d.battery), (NO_ALARM, 41));

        assert!(!store.resolve_alarm("unknown").unwrap());
        let unknown = DeviceEvent {
            id: "unknown".to_string(),
            button: 1,
            battery: 100,
        };
        assert!(!store.record_event(&unknown).unwrap());
    }

    #[test]
    fn test_delete_device() {
        let store = store();
        store.insert_device("d1", "Hall").unwrap();
        store.insert_device("d2", "Garage").unwrap();

        assert!(store.delete_device("d1").unwrap());
        assert!(!store.delete_device("d1").unwrap());

        let ids: Vec<String> = store.all_devices().unwrap().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["d2".to_string()]);
    }

    #[test]
    fn test_mark_offline() {
        let store = store();
        for id in ["fresh", "stale", "broken"] {
            store.insert_device(id, "Hall").unwrap();
        }
        set_last_event(&store, "stale", "2020-01-01T00:00:00+00:00");
        set_last_event(&store, "broken", "not a timestamp");

        let offline = store.mark_offline(Duration::from_secs(300)).unwrap();
        assert_eq!(offline, vec!["stale".to_string()]);

        let devices = store.all_devices().unwrap();
        for d in devices {
            assert_eq!(d.online, d.id != "stale");
        }

        // already offline devices aren't reported twice
        assert!(store.mark_offline(Duration::from_secs(300)).unwrap().is_empty());

        // an event brings the device back online
        let event = DeviceEvent {
            id: "stale".to_string(),
            button: 1,
            battery: 100,
        };
        store.record_event(&event).unwrap();
        assert!(store.all_devices().unwrap().iter().all(|d| d.online));
    }
}
