use std::sync::Arc;

use crate::application::ports::cart_repository::CartRepository;
use crate::application::ports::category_repository::CategoryRepository;
use crate::application::ports::product_repository::ProductRepository;
use crate::application::ports::profile_repository::ProfileRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    category_repo: Arc<dyn CategoryRepository>,
    product_repo: Arc<dyn ProductRepository>,
    cart_repo: Arc<dyn CartRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl AppServices {
    pub fn new(
        category_repo: Arc<dyn CategoryRepository>,
        product_repo: Arc<dyn ProductRepository>,
        cart_repo: Arc<dyn CartRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            category_repo,
            product_repo,
            cart_repo,
            profile_repo,
            user_repo,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn category_repo(&self) -> Arc<dyn CategoryRepository> {
        self.services.category_repo.clone()
    }

    pub fn product_repo(&self) -> Arc<dyn ProductRepository> {
        self.services.product_repo.clone()
    }

    pub fn cart_repo(&self) -> Arc<dyn CartRepository> {
        self.services.cart_repo.clone()
    }

    pub fn profile_repo(&self) -> Arc<dyn ProfileRepository> {
        self.services.profile_repo.clone()
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }
}
