//! SQL schemas, one per database file.
//!
//! Executed once when a store is opened. Each script is idempotent thanks to
//! `CREATE TABLE IF NOT EXISTS` and stamps `PRAGMA user_version`; future
//! migrations will be gated on that number.
//!
//! Rows are strictly append-only: no UPDATE or DELETE is ever issued.
//! `AUTOINCREMENT` keeps ids from being reused.

pub const USERS: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS users (
    user_id       INTEGER PRIMARY KEY AUTOINCREMENT,
    username      TEXT NOT NULL,
    email         TEXT NOT NULL,   -- not unique
    role          TEXT NOT NULL DEFAULT 'user',   -- 'user' | 'admin'
    password_hash TEXT NOT NULL    -- argon2 PHC string
);

CREATE INDEX IF NOT EXISTS users_email_idx ON users(email);

PRAGMA user_version = 1;
";

pub const STEPS: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS step_counter (
    step_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    step_count INTEGER NOT NULL CHECK (step_count >= 0)
);

PRAGMA user_version = 1;
";

pub const CALORIES: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS calorie_records (
    calorie_id      INTEGER PRIMARY KEY AUTOINCREMENT,
    calories_burned INTEGER NOT NULL CHECK (calories_burned >= 0),
    recorded_at_ms  INTEGER NOT NULL   -- Unix epoch milliseconds, UTC
);

CREATE INDEX IF NOT EXISTS calorie_records_recorded_idx
    ON calorie_records(recorded_at_ms);

PRAGMA user_version = 1;
";

pub const WORKOUTS: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS workouts (
    workout_id   INTEGER PRIMARY KEY AUTOINCREMENT,
    title        TEXT NOT NULL,
    instructions TEXT NOT NULL,
    duration     TEXT NOT NULL,   -- free text, e.g. '30 min'
    category     TEXT NOT NULL    -- free text; grouping key
);

PRAGMA user_version = 1;
";

pub const ACTIVITIES: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS activities (
    activity_id INTEGER PRIMARY KEY AUTOINCREMENT,
    title       TEXT NOT NULL,
    value       TEXT NOT NULL
);

PRAGMA user_version = 1;
";
