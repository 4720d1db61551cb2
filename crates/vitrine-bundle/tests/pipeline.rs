//! End-to-end gallery build test.
//!
//! Discovers a temporary apps tree, builds one app through a stub
//! bundler, generates its host document, and checks the output layout
//! plus the naming contract that ties the two artifacts together.

use async_trait::async_trait;
use std::fs;
use tempfile::TempDir;
use vitrine_bundle::{build_selected, BuildTarget, BundleOutput, Bundler};
use vitrine_manifest::{discover, select, GalleryLayout};

struct StubBundler;

#[async_trait]
impl Bundler for StubBundler {
    async fn bundle(&self, target: &BuildTarget) -> vitrine_bundle::Result<BundleOutput> {
        Ok(BundleOutput {
            script: format!(
                "window.{} = function (id) {{ document.getElementById(id); }};\n",
                target.initializer
            ),
            stylesheet: Some(":root { --gallery: 1; }\n".to_string()),
        })
    }
}

fn gallery(names: &[&str]) -> (TempDir, GalleryLayout) {
    let root = TempDir::new().unwrap();
    let apps_dir = root.path().join("apps");
    for name in names {
        let dir = apps_dir.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.tsx"), "export {};\n").unwrap();
    }
    let layout = GalleryLayout::new(apps_dir, root.path().join("dist"));
    (root, layout)
}

#[tokio::test]
async fn builds_one_app_and_generates_its_host_document() {
    let (_root, layout) = gallery(&["BQ", "GQ"]);
    let manifests = discover(&layout).unwrap();

    let artifacts = build_selected(&manifests, Some("BQ"), &StubBundler)
        .await
        .unwrap();
    let bq = select(&manifests, "BQ").unwrap();
    let doc = vitrine_hostdoc::write(bq).unwrap();

    // Fixed output layout.
    assert_eq!(artifacts.bundle, layout.dist_dir.join("bq").join("bq.js"));
    assert_eq!(
        artifacts.stylesheet.as_deref(),
        Some(layout.dist_dir.join("bq").join("bq.css").as_path())
    );
    assert_eq!(doc, layout.dist_dir.join("bq").join("index.html"));

    // The document bootstraps exactly the global the bundle exposes,
    // against exactly the mount element it declares.
    let script = fs::read_to_string(&artifacts.bundle).unwrap();
    let html = fs::read_to_string(&doc).unwrap();
    assert!(script.contains("window.initializeBQ"));
    assert!(html.contains("<div id=\"bq-app\"></div>"));
    assert!(html.contains("<script type=\"module\" src=\"./bq.js\"></script>"));
    assert!(html.contains("window.initializeBQ(\"bq-app\");"));

    // The sibling app was not built and not touched.
    assert!(!layout.dist_dir.join("gq").exists());
}

#[tokio::test]
async fn interleaved_builds_of_different_apps_do_not_disturb_each_other() {
    let (_root, layout) = gallery(&["BQ", "GQ"]);
    let manifests = discover(&layout).unwrap();

    build_selected(&manifests, Some("BQ"), &StubBundler)
        .await
        .unwrap();
    let bq_before = fs::read(layout.dist_dir.join("bq").join("bq.js")).unwrap();

    build_selected(&manifests, Some("GQ"), &StubBundler)
        .await
        .unwrap();
    vitrine_hostdoc::write_all(&manifests).unwrap();

    let bq_after = fs::read(layout.dist_dir.join("bq").join("bq.js")).unwrap();
    assert_eq!(bq_before, bq_after);

    for slug in ["bq", "gq"] {
        let dir = layout.dist_dir.join(slug);
        assert!(dir.join(format!("{slug}.js")).is_file());
        assert!(dir.join(format!("{slug}.css")).is_file());
        assert!(dir.join("index.html").is_file());
    }
}

#[tokio::test]
async fn unknown_selector_terminates_without_writing() {
    let (_root, layout) = gallery(&["BQ"]);
    let manifests = discover(&layout).unwrap();

    let err = build_selected(&manifests, Some("ZZ"), &StubBundler)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("ZZ"));
    assert!(!layout.dist_dir.exists());
}
