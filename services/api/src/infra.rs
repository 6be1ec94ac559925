use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;
use yojana_setu::error::AppError;
use yojana_setu::matching::SchemeCatalog;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the catalog at `path`, or the built-in sample when no path is configured.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<Arc<SchemeCatalog>, AppError> {
    let catalog = match path {
        Some(path) => SchemeCatalog::from_path(path)?,
        None => {
            let catalog = SchemeCatalog::sample();
            info!(schemes = catalog.len(), "using built-in sample catalog");
            catalog
        }
    };
    Ok(Arc::new(catalog))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_falls_back_to_sample() {
        let catalog = load_catalog(None).expect("sample loads");
        assert_eq!(catalog.len(), SchemeCatalog::sample().len());
    }

    #[test]
    fn unsupported_path_is_a_catalog_error() {
        let error = load_catalog(Some(Path::new("schemes.txt"))).expect_err("rejected");
        assert!(matches!(error, AppError::Catalog(_)));
    }
}
