use crate::application::error::{AppError, AppResult};
use crate::application::ports::profile_repository::ProfileRepository;
use crate::domain::profile::Profile;

pub struct GetProfile<'a, R: ProfileRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: ProfileRepository + ?Sized> GetProfile<'a, R> {
    pub async fn execute(&self, user_id: i32) -> AppResult<Profile> {
        self.repo
            .get(user_id)
            .await?
            .ok_or(AppError::NotFound("profile not found"))
    }
}
