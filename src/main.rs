mod app;
use vocab_cards::*;

use app::VocabApp;
use config::AppConfig;
use data::source_for;
use models::category::validate_categories;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    let mut store = VocabularyStore::new();
    let source = source_for(&config.data_source);
    store.load(&*source);
    validate_categories(&store);

    log::info!(
        "Loaded {} words in {} categories",
        store.total_count(),
        store.category_ids().count()
    );
    for id in store.category_ids() {
        log::info!("  - {} ({} words)", id, store.category_count(id));
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([520.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Dutch Flashcards",
        options,
        Box::new(|_cc| Ok(Box::new(VocabApp::new(store, config)))),
    )
}
