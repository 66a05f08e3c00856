use std::path::Path;

use pdf2json::{ConvertOptions, convert};
use tracing::{info, warn};

use crate::shared::error_message;

pub fn run(input: &Path, output: &Path) -> Result<(), i32> {
    let extraction = convert(input, output, &ConvertOptions::default()).map_err(|e| {
        eprintln!("{}", error_message(&e));
        1
    })?;

    if !extraction.is_clean() {
        warn!(
            failed = ?extraction.failed_pages(),
            total = extraction.page_count,
            "some pages contributed no text"
        );
    }
    info!(
        pages = extraction.page_count,
        chars = extraction.document.as_str().chars().count(),
        "conversion finished"
    );

    println!("PDF content successfully written to {}", output.display());
    Ok(())
}
