pub mod ai;
pub mod app;
pub mod chat;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod images;
pub mod ingredients;
pub mod logging;
pub mod recipes;
pub mod state;
pub mod storage;
pub mod viewer;

// SQLite `CURRENT_TIMESTAMP` text, kept as-is on the wire.
time::serde::format_description!(
    sqlite_timestamp,
    PrimitiveDateTime,
    "[year]-[month]-[day] [hour]:[minute]:[second]"
);
