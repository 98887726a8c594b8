use std::sync::Arc;
use isutrain_core::IsutrainMock;

#[derive(Clone)]
pub struct AppState {
    pub mock: Arc<IsutrainMock>,
}

impl AppState {
    pub fn new(mock: Arc<IsutrainMock>) -> Self {
        Self { mock }
    }
}
