use anyhow::Context as _;
use stickyboard::logging;
use stickyboard::settings::Settings;
use stickyboard::storage::FileStore;
use stickyboard::store::NoteStore;

fn main() -> anyhow::Result<()> {
    let loaded = Settings::try_load();
    let settings = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(&settings.log_filter);
    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "Failed to load settings, using defaults");
    }

    let backend = match &settings.data_dir {
        Some(dir) => FileStore::new(dir.clone()),
        None => FileStore::in_default_location().context("No platform data directory")?,
    };
    tracing::info!(dir = %backend.dir().display(), "Using note storage");

    let store = NoteStore::load(Box::new(backend), settings.storage_key.clone());
    stickyboard::ui::run(store, settings);
    Ok(())
}
