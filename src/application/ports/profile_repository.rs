use async_trait::async_trait;

use crate::domain::profile::Profile;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn create(&self, profile: &Profile) -> anyhow::Result<()>;
    async fn get(&self, user_id: i32) -> anyhow::Result<Option<Profile>>;
    /// Returns whether a row was affected.
    async fn update(&self, profile: &Profile) -> anyhow::Result<bool>;
}
