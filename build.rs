//! Bundles the storefront stylesheets into `assets/dist/bundle.css`.
//!
//! `main.css` pulls in the component sheets through `@import`; the bundle is
//! minified and vendor-prefixed for the browsers the shop supports.

use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
    targets::{Browsers, Targets},
};
use std::fs;
use std::path::Path;

const CSS_DIR: &str = "assets/css";
const ENTRY: &str = "assets/css/main.css";
const OUTPUT: &str = "assets/dist/bundle.css";

/// Major version packed the way lightningcss expects (major << 16)
const fn version(major: u32) -> Option<u32> {
    Some(major << 16)
}

fn storefront_targets() -> Targets {
    Targets::from(Browsers {
        chrome: version(100),
        edge: version(100),
        firefox: version(100),
        safari: version(14),
        ios_saf: version(14),
        samsung: version(16),
        android: version(100),
        ..Browsers::default()
    })
}

fn watch_stylesheets() {
    println!("cargo:rerun-if-changed={}", CSS_DIR);
    if let Ok(entries) = fs::read_dir(CSS_DIR) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "css") {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }
}

fn bundle(targets: Targets) -> Result<String, String> {
    let provider = FileProvider::new();
    let mut bundler = Bundler::new(&provider, None, ParserOptions::default());

    let mut stylesheet = bundler
        .bundle(Path::new(ENTRY))
        .map_err(|e| format!("bundling {}: {}", ENTRY, e))?;

    stylesheet
        .minify(MinifyOptions {
            targets,
            ..Default::default()
        })
        .map_err(|e| format!("minifying: {}", e))?;

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            targets,
            ..Default::default()
        })
        .map_err(|e| format!("printing: {}", e))?;

    Ok(css.code)
}

fn main() {
    watch_stylesheets();

    let css = match bundle(storefront_targets()) {
        Ok(css) => css,
        Err(e) => panic!("storefront CSS bundle failed: {}", e),
    };

    let output = Path::new(OUTPUT);
    if let Some(dir) = output.parent() {
        fs::create_dir_all(dir).unwrap_or_else(|e| panic!("creating {}: {}", dir.display(), e));
    }
    fs::write(output, css).unwrap_or_else(|e| panic!("writing {}: {}", OUTPUT, e));
}
