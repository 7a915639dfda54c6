use crate::errors::AppError;
use crate::models::AppData;
use crate::tasks;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

// `selected == None` means the calendar is hidden.
#[derive(Debug, Default)]
pub struct Tracker {
    pub data: AppData,
    pub selected: Option<String>,
}

impl Tracker {
    pub fn new(data: AppData) -> Self {
        Self {
            data,
            selected: None,
        }
    }

    pub fn delete_task(&mut self, name: &str, confirmed: bool) -> bool {
        if !confirmed {
            return false;
        }

        let deleted = tasks::delete_task(&mut self.data, name);
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        }
        deleted
    }

    pub fn select(&mut self, name: &str) -> Result<(), AppError> {
        if !tasks::contains(&self.data, name) {
            return Err(AppError::not_found(format!("unknown task '{name}'")));
        }
        self.selected = Some(name.to_string());
        Ok(())
    }

    pub fn selected_task(&self) -> Result<String, AppError> {
        self.selected
            .clone()
            .ok_or_else(|| AppError::not_found("no task selected"))
    }
}

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, data: AppData) -> Self {
        Self {
            data_path,
            tracker: Arc::new(Mutex::new(Tracker::new(data))),
        }
    }
}
