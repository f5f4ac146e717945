use std::sync::Arc;

use mealmatch_core::application::MealmatchService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MealmatchService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MealmatchService) -> Self {
        Self { args, service }
    }
}
