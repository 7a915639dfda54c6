use crate::errors::AppError;
use crate::models::AppData;
use crate::tasks;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{debug, error, warn};

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/state.json"))
}

pub async fn load_data(path: &Path) -> Result<AppData, AppError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            debug!("no data file at {}, starting empty", path.display());
            return Ok(AppData::default());
        }
        Err(err) => {
            error!("failed to read data file: {err}");
            return Err(err.into());
        }
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(AppData::default());
    }

    let mut data: AppData = serde_json::from_slice(&bytes).map_err(|err| {
        error!("failed to parse data file: {err}");
        AppError::from(err)
    })?;
    if tasks::normalize(&mut data) {
        warn!("repaired duplicate or missing task entries in {}", path.display());
    }
    Ok(data)
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
