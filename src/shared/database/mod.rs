pub mod connection;

pub use connection::{default_db_path, init_schema, open_database};
