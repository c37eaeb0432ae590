#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DbTable {
    Devices,
    Users,
}

impl DbTable {
    pub const ALL: [DbTable; 2] = [DbTable::Devices, DbTable::Users];

    pub fn to_str(self) -> &'static str {
        match self {
            DbTable::Devices => "devices",
            DbTable::Users => "users",
        }
    }

    pub(crate) fn sql_create(self) -> String {
        let table_name = self.to_str();
        match self {
            DbTable::Devices => format!(
                "
                CREATE TABLE IF NOT EXISTS {table_name} (
                    id TEXT PRIMARY KEY,
                    button INTEGER NOT NULL DEFAULT 0,
                    battery INTEGER NOT NULL DEFAULT 100,
                    last_event TEXT,
                    online INTEGER NOT NULL DEFAULT 1,
                    location TEXT NOT NULL
                );
            "
            ),
            DbTable::Users => format!(
                "
                CREATE TABLE IF NOT EXISTS {table_name} (
                    id INTEGER PRIMARY KEY,
                    username TEXT NOT NULL UNIQUE,
                    password_hash TEXT NOT NULL,
                    role TEXT NOT NULL,
                    created_at TEXT NOT NULL
                );
            "
            ),
        }
    }
}
