const DEFAULT_SETTINGS: &str = "src/default_settings.toml";

fn main() {
    println!("cargo:rerun-if-changed={DEFAULT_SETTINGS}");

    // `settings()` expects the embedded defaults to parse.
    let table: toml::Table = include_str!("src/default_settings.toml")
        .parse()
        .unwrap_or_else(|e| panic!("{DEFAULT_SETTINGS} is not valid TOML: {e}"));
    let has_json = table
        .get("output")
        .and_then(|output| output.get("json"))
        .is_some_and(toml::Value::is_bool);
    if !has_json {
        panic!("{DEFAULT_SETTINGS} must set a boolean output.json");
    }
}
