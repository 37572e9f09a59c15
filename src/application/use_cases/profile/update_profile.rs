use crate::application::error::{AppError, AppResult};
use crate::application::ports::profile_repository::ProfileRepository;
use crate::domain::profile::Profile;

pub struct UpdateProfile<'a, R: ProfileRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProfileRepository + ?Sized> UpdateProfile<'a, R> {
    /// Overwrites the caller's profile fields. Not-found if no profile row
    /// exists yet.
    pub async fn execute(&self, profile: Profile) -> AppResult<Profile> {
        let updated = self.repo.update(&profile).await?;
        if !updated {
            return Err(AppError::NotFound("profile not found"));
        }
        Ok(profile)
    }
}
