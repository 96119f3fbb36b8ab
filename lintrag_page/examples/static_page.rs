//! Static page generation example.
//!
//! Run with: `cargo run -p lintrag-page --example static_page`

use lintrag_page::{RenderConfig, render_page, types::DemoForm};

fn main() -> std::io::Result<()> {
    let config = RenderConfig {
        asset_base: "https://cdn.example.com".into(),
        ..Default::default()
    };

    let html = render_page(&config, &DemoForm::default());

    let output_path = "lintrag.html";
    std::fs::write(output_path, &html)?;

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
    Ok(())
}
