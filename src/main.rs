//! Linkshelf — a minimal desktop editor for a categorized bookmarks collection.
//!
//! Entry point: opens the webview editor window.
//! When built without the `gui` feature, runs an interactive console demo.

#[cfg(feature = "gui")]
fn main() {
    linkshelf::ui::webview_app::run();
}

#[cfg(not(feature = "gui"))]
fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              Linkshelf v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║     Categorized bookmarks editor (console walkthrough)     ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_document_manager();
    demo_document_store();
    demo_controller();
    demo_settings();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 5 components demonstrated successfully!");
    println!("  Linkshelf is ready for webview UI integration.");
    println!("═══════════════════════════════════════════════════════════════");
}

#[cfg(not(feature = "gui"))]
fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

#[cfg(not(feature = "gui"))]
fn demo_document_manager() {
    use linkshelf::managers::document_manager::{DocumentManager, DocumentManagerTrait};
    use linkshelf::types::document::MoveDirection;
    section("Document Manager");

    let mut mgr = DocumentManager::new();
    mgr.add_category("Work").unwrap();
    mgr.add_category("News").unwrap();
    mgr.add_category("Rust").unwrap();
    println!("  Created 3 categories, count = {}", mgr.category_count());

    mgr.add_link(2, "The Book", "doc.rust-lang.org/book").unwrap();
    mgr.add_link(2, "Crates", "https://crates.io").unwrap();
    println!("  Added 2 links to 'Rust'");
    println!("  Normalized URL: {}", mgr.link(2, 0).unwrap().url);

    let new_index = mgr.move_category(2, MoveDirection::Up).unwrap();
    println!("  Moved 'Rust' up -> index {}", new_index);

    let same = mgr.move_category(0, MoveDirection::Up).unwrap();
    println!("  Move at top boundary: no-op, index still {}", same);

    mgr.rename_category(0, "Job").unwrap();
    println!("  Renamed first category to: {}", mgr.category(0).unwrap().title);

    let removed = mgr.delete_category(2).unwrap();
    println!("  Deleted '{}', remaining = {}", removed.title, mgr.category_count());

    let rejected = mgr.add_category("   ");
    println!("  Whitespace-only title: {}", if rejected.is_err() { "correctly rejected" } else { "ERROR" });
    println!("  ✓ DocumentManager OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_document_store() {
    use linkshelf::services::document_store::{DocumentStore, DocumentStoreTrait};
    use linkshelf::types::document::{BookmarksDocument, Category, Link};
    section("Document Store");

    let mut doc = BookmarksDocument::default();
    let mut cat = Category::new("Dev");
    cat.links.push(Link {
        name: "GitHub".to_string(),
        url: "https://github.com".to_string(),
    });
    doc.categories.push(cat);

    let json = DocumentStore::serialize(&doc).unwrap();
    println!("  Serialized document: {} bytes of pretty JSON", json.len());

    let reparsed = DocumentStore::parse(&json).unwrap();
    assert_eq!(reparsed, doc);
    println!("  Parse round-trip: OK");

    let tolerant = DocumentStore::parse(r#"{"categories":[{"title":"Empty"}]}"#).unwrap();
    println!("  Missing 'links' key tolerated: {} link(s)", tolerant.categories[0].links.len());

    let mut store = DocumentStore::new();
    let path = std::env::temp_dir().join("linkshelf_demo.json");
    store.save_as(&path, &doc).unwrap();
    println!("  Saved as: {:?}", store.file_name());

    let loaded = store.load(&path).unwrap();
    println!("  Loaded back: {} category(s)", loaded.categories.len());

    let _ = std::fs::remove_file(&path);
    println!("  ✓ DocumentStore OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_controller() {
    use std::io;
    use linkshelf::controller::{EditorController, UrlOpener};
    use linkshelf::types::document::MoveDirection;
    section("Editor Controller");

    struct PrintOpener;
    impl UrlOpener for PrintOpener {
        fn open(&self, url: &str) -> io::Result<()> {
            println!("  [open] {}", url);
            Ok(())
        }
    }

    let mut ctrl = EditorController::new();
    ctrl.add_category("Reading").unwrap();
    ctrl.add_category("Tools").unwrap();
    println!("  Categories: {:?}", ctrl.category_titles());

    let blocked = ctrl.add_link("Lobsters", "lobste.rs");
    println!("  Add link with no selection: {}", if blocked.is_err() { "correctly rejected" } else { "ERROR" });

    ctrl.select_category(0).unwrap();
    ctrl.add_link("Lobsters", "lobste.rs").unwrap();
    ctrl.add_link("HN", "news.ycombinator.com").unwrap();
    println!("  Link rows: {:?}", ctrl.link_rows());

    ctrl.select_link(1).unwrap();
    ctrl.move_selected_link(MoveDirection::Up).unwrap();
    println!("  Moved link up, selection followed to index {:?}", ctrl.selected_link());

    ctrl.open_selected_link(&PrintOpener).unwrap();

    ctrl.delete_selected_link().unwrap();
    println!("  Deleted link: category still selected = {}", ctrl.selected_category().is_some());

    ctrl.delete_selected_category().unwrap();
    println!("  Deleted category: selection cleared = {}", ctrl.selected_category().is_none());
    println!("  ✓ EditorController OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_settings() {
    use linkshelf::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    section("Settings Engine");

    let path = std::env::temp_dir().join("linkshelf_demo_settings.json");
    let mut engine = SettingsEngine::new(Some(path.to_string_lossy().to_string()));
    engine.load().unwrap();
    println!("  Window: {}x{}", engine.settings().window.width, engine.settings().window.height);
    println!("  Last file: {:?}", engine.settings().last_file);

    engine.set_last_file(Some("/home/demo/bookmarks.json".to_string())).unwrap();
    println!("  Remembered last file: {:?}", engine.settings().last_file);

    engine.reset().unwrap();
    println!("  Reset to defaults: last_file = {:?}", engine.settings().last_file);

    let _ = std::fs::remove_file(&path);
    println!("  ✓ SettingsEngine OK");
    println!();
}

#[cfg(not(feature = "gui"))]
fn demo_app_core() {
    use linkshelf::app::App;
    section("App Core (full lifecycle)");

    let mut app = App::new();
    println!("  Initialized App: controller + store + settings engine");

    app.startup();
    println!("  Startup sequence: settings → reopen last collection");

    app.controller.add_category("Scratch").unwrap();
    let path = std::env::temp_dir().join("linkshelf_demo_app.json");
    app.save_file_as(&path).unwrap();
    println!("  Saved collection as: {:?}", path.file_name().unwrap());

    app.shutdown();
    println!("  Shutdown sequence: flush settings");

    let _ = std::fs::remove_file(&path);
    println!("  ✓ App Core OK");
}
