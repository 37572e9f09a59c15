use crate::application::error::AppResult;
use crate::application::ports::profile_repository::ProfileRepository;
use crate::domain::profile::Profile;

pub struct CreateProfile<'a, R: ProfileRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProfileRepository + ?Sized> CreateProfile<'a, R> {
    /// The user id comes from the resolved principal, never the request
    /// body. A second create for the same user violates the storage key
    /// and surfaces as a conflict.
    pub async fn execute(&self, profile: Profile) -> AppResult<Profile> {
        self.repo.create(&profile).await?;
        Ok(profile)
    }
}
