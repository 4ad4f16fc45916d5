use crate::storage::JsonFileStore;
use crate::ui::Page;
use crate::widget::Widget;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub page: Page,
    pub widget: Arc<Mutex<Widget<JsonFileStore>>>,
}

impl AppState {
    pub fn new(page: Page, widget: Widget<JsonFileStore>) -> Self {
        Self {
            page,
            widget: Arc::new(Mutex::new(widget)),
        }
    }
}
