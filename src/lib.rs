pub mod browser;
pub mod config;
pub mod dist_server;
pub mod error;
pub mod file;
pub mod listing;
pub mod mime;
pub mod no_cache;
pub mod shutdown;
pub mod startup;
pub mod static_files;

#[cfg(test)]
mod test_dir;
