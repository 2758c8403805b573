pub mod config;
pub mod db_types;
pub mod processor;
pub mod processor_enums;
