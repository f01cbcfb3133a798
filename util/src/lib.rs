pub mod config;
pub mod db_url;
pub mod state;
