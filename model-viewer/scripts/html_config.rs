use std::env;
use std::fs;
use std::path::PathBuf;
use std::process;

//  Configured html output name (set in Trunk.toml)
const HTML_OUTPUT: &str = "model-viewer.html";

fn main() {
    //  Environment variable parameter - the distributed directory
    let Ok(staging_dir) = env::var("TRUNK_STAGING_DIR") else {
        eprintln!("TRUNK_STAGING_DIR is not set; run this as a Trunk post_build hook");
        process::exit(1);
    };
    let staged_html_path = PathBuf::from(staging_dir).join(HTML_OUTPUT);

    let html = match fs::read_to_string(&staged_html_path) {
        Ok(html) => html,
        Err(err) => {
            eprintln!("Failed to read {}: {}", staged_html_path.display(), err);
            process::exit(1);
        }
    };

    // Relative script paths so the viewer works from any sub-path or iframe
    let html = html
        .replace("/model-viewer.js", "./model-viewer.js")
        .replace("/model-viewer_bg.wasm", "./model-viewer_bg.wasm");

    if let Err(err) = fs::write(&staged_html_path, html) {
        eprintln!("Failed to write {}: {}", staged_html_path.display(), err);
        process::exit(1);
    }
}
