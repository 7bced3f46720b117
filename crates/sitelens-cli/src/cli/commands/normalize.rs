//! `sitelens normalize <input>` – show derived URLs without fetching.

use sitelens_core::manifest_url::ManifestReference;

pub fn run_normalize(input: &str) {
    let reference = ManifestReference::new(input);
    if reference.is_empty() {
        println!("(empty input)");
        return;
    }
    println!("manifest: {}", reference.manifest_url());
    println!("base:     {}", reference.base_url());
}
