use crate::proxy::ModelProxy;
use crate::view::ViewModel;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub view: Arc<Mutex<ViewModel>>,
    pub proxy: ModelProxy,
}

impl AppState {
    pub fn new(proxy: ModelProxy, current_year: i32) -> Self {
        Self {
            view: Arc::new(Mutex::new(ViewModel::new(current_year))),
            proxy,
        }
    }
}
