use std::fs;
use std::path::PathBuf;

/// Directory holding captured server payloads.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Read a fixture by file name, e.g. `get_account_response.xml`.
pub fn load_fixture(name: &str) -> Result<String, String> {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).map_err(|e| format!("Failed to read {}: {e}", path.display()))
}

/// Read a JSON fixture as an object.
pub fn load_json_object(name: &str) -> Result<serde_json::Map<String, serde_json::Value>, String> {
    let contents = load_fixture(name)?;
    match serde_json::from_str(&contents).map_err(|e| format!("Invalid {name}: {e}"))? {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(format!("{name} is not a JSON object: {other}")),
    }
}
