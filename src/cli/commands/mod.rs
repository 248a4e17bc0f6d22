pub mod countries;
pub mod init;
pub mod interactive;
pub mod language;
pub mod languages;
pub mod translate;
