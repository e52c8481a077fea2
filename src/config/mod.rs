#[allow(clippy::module_inception)]
pub mod config;

pub use config::{
    Config, DuplicatePolicy, ParentLinking, config_path, get_pat_token, load_config, save_config,
};
