use std::path::PathBuf;
use std::sync::Arc;

use crate::gemini::ModelGateway;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn ModelGateway>,
    pub upload_dir: PathBuf,
}
