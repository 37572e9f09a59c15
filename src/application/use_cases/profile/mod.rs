pub mod create_profile;
pub mod get_profile;
pub mod update_profile;
