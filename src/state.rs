use std::sync::Arc;

use crate::api::dto::pagination::PagingLimits;
use crate::application::services::AuthService;
use crate::domain::repositories::{ContactRepository, UserRepository};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub auth_service: Arc<AuthService>,
    pub paging: PagingLimits,
}
