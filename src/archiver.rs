use std::fs::File;
use std::io::Write;
use anyhow::Result;
use serde::Serialize;
use crate::models::ProductRecord;

#[derive(Serialize)]
struct Archive<'a> {
    query: &'a str,
    timestamp: String,
    results: &'a [ProductRecord],
}

pub fn save_to_file(records: &[ProductRecord], query: &str, filename: &str) -> Result<()> {
    let archive = Archive {
        query,
        timestamp: chrono::Utc::now().to_rfc3339(),
        results: records,
    };
    let json = serde_json::to_string_pretty(&archive)?;
    let mut file = File::create(filename)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}
