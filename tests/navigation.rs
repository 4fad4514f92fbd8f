//! End-to-end browsing over a manifest-built library.

use folio::config::{LIBRARY_MANIFEST, ROOT_LABEL};
use folio::core::{LevelView, Listing, Navigator, TextPreview, resolve};
use folio::models::{BrowseRoute, DirectoryNode, Manifest};

fn library() -> DirectoryNode {
    let manifest = Manifest::from_json(LIBRARY_MANIFEST).expect("embedded manifest parses");
    DirectoryNode::from_manifest(ROOT_LABEL, &manifest)
}

fn listing(nav: &Navigator) -> Listing<String> {
    match nav.view(&TextPreview) {
        LevelView::Listing(listing) => listing,
        LevelView::Unresolved(unresolved) => panic!("unexpected error: {}", unresolved.error),
    }
}

fn folder_names(listing: &Listing<String>) -> Vec<&str> {
    listing.folders.iter().map(|f| f.name.as_str()).collect()
}

fn file_names(listing: &Listing<String>) -> Vec<&str> {
    listing.files.iter().map(|f| f.name.as_str()).collect()
}

// =============================================================================
// Tree and Resolution
// =============================================================================

#[test]
fn test_manifest_tree_keeps_first_seen_order() {
    let nav = Navigator::new(library(), "");
    let root = listing(&nav);

    assert_eq!(root.name, ROOT_LABEL);
    assert_eq!(root.item_count, "6 items");
    assert_eq!(folder_names(&root), vec!["Reports", "Archive", "Shared"]);
    assert_eq!(
        file_names(&root),
        vec!["report.pdf", "notes.txt", "a-very-long-file-name-for-the-overview.png"]
    );
    assert!(root.breadcrumbs.is_empty());
}

#[test]
fn test_resolve_nested_and_missing() {
    let tree = library();

    let scans = resolve(&tree, "Archive/scans").expect("scans resolves");
    assert_eq!(scans.len(), 2);
    assert!(resolve(&tree, "Archive/empty-for-now").unwrap().is_empty());

    let err = resolve(&tree, "Reports/2025").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.depth, 1);

    let err = resolve(&tree, "report.pdf/inner").unwrap_err();
    assert!(err.is_not_a_folder());
}

// =============================================================================
// Listing
// =============================================================================

#[test]
fn test_tiles_are_formatted() {
    let nav = Navigator::new(library(), "Reports/2023");
    let level = listing(&nav);

    assert_eq!(level.files.len(), 1);
    assert_eq!(level.files[0].size_mb, "3.000");
    assert_eq!(level.files[0].thumbnail, "[PDF]");

    let root = listing(&Navigator::new(library(), ""));
    let png = &root.files[2];
    assert_eq!(png.label, "a-very-long-file-nam...");
    assert_eq!(png.size_mb, "0.700");

    let reports = &root.folders[0];
    assert_eq!(reports.item_count, "3 items");
    assert_eq!(reports.target_path, "Reports");
}

#[test]
fn test_filter_is_case_sensitive() {
    let mut nav = Navigator::new(library(), "");

    nav.set_filter("rep");
    let level = listing(&nav);
    assert!(level.folders.is_empty());
    assert_eq!(file_names(&level), vec!["report.pdf"]);
    assert_eq!(level.item_count, "6 items");

    nav.set_filter("Rep");
    let level = listing(&nav);
    assert_eq!(folder_names(&level), vec!["Reports"]);
    assert!(level.files.is_empty());

    nav.set_filter("zzz");
    assert!(listing(&nav).no_matches());

    nav.set_filter("");
    assert_eq!(listing(&nav).folders.len(), 3);
}

// =============================================================================
// Navigation Session
// =============================================================================

#[test]
fn test_descend_and_return_keeps_ancestor_state() {
    let mut nav = Navigator::new(library(), "");
    nav.set_filter("Rep");

    let target = nav.open_folder("Reports").expect("Reports is a folder");
    assert_eq!(target, "Reports");
    assert_eq!(nav.filter(), None);

    let level = listing(&nav);
    let crumbs: Vec<(&str, bool)> = level
        .breadcrumbs
        .iter()
        .map(|c| (c.label.as_str(), c.is_current))
        .collect();
    assert_eq!(crumbs, vec![("Reports", true)]);

    nav.navigate("");
    assert_eq!(nav.filter(), Some("Rep"));
}

#[test]
fn test_sibling_navigation_drops_state() {
    let mut nav = Navigator::new(library(), "Reports");
    nav.set_filter("20");
    nav.navigate("Archive");
    nav.navigate("Reports");
    assert_eq!(nav.filter(), None);
}

#[test]
fn test_preview_flow() {
    let mut nav = Navigator::new(library(), "Reports/2023");

    let item = nav.select_file("q4-summary.pdf").expect("file exists");
    assert_eq!(item.title.as_deref(), Some("Q4 2023 summary"));

    let level = listing(&nav);
    let preview = level.preview.expect("preview is open");
    assert_eq!(preview.name, "q4-summary.pdf");
    assert!(preview.content.contains("3.000 MB"));
    assert!(preview.content.contains("2024-01-01"));

    nav.close_preview();
    assert!(listing(&nav).preview.is_none());

    assert!(nav.select_file("missing.pdf").is_err());
    assert!(nav.preview().is_none());
}

#[test]
fn test_unresolved_level_keeps_breadcrumbs() {
    let nav = Navigator::new(library(), "Reports/2025/q1");

    match nav.view(&TextPreview) {
        LevelView::Unresolved(unresolved) => {
            assert_eq!(unresolved.breadcrumbs.len(), 3);
            assert!(unresolved.breadcrumbs[2].is_current);
            assert_eq!(unresolved.message, "Cannot resolve path: /Reports/2025/q1");
            assert_eq!(unresolved.error.segment, "2025");
        }
        LevelView::Listing(_) => panic!("path should not resolve"),
    }
}

// =============================================================================
// Hash Routing
// =============================================================================

#[test]
fn test_encoded_hash_reaches_folder() {
    let manifest = Manifest::from_json(
        r#"{"files":[{"path":"My Docs/a.txt","size":1},{"path":"Résumé/b.txt","size":2}]}"#,
    )
    .expect("manifest parses");
    let tree = DirectoryNode::from_manifest(ROOT_LABEL, &manifest);
    let mut nav = Navigator::new(tree, "");

    let root = listing(&nav);
    for tile in &root.folders {
        let href = BrowseRoute::new(&tile.target_path).to_hash();
        assert!(!href.contains(' '), "unescaped link {}", href);

        // The browser reports the link back percent-encoded
        nav.navigate(&BrowseRoute::from_hash(&href).path);
        let level = listing(&nav);
        assert_eq!(level.name, tile.name);
        assert_eq!(level.files.len(), 1);
    }

    nav.navigate(&BrowseRoute::from_hash("#/R%C3%A9sum%C3%A9").path);
    assert_eq!(listing(&nav).name, "Résumé");
}
