//! Print or write the built-in layout.

use std::path::PathBuf;

use standcard_table_model::layout::Layout;

pub fn run(output: Option<PathBuf>) -> anyhow::Result<()> {
    let json = Layout::default().to_json()?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, json)?;
            println!("Layout written to: {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
