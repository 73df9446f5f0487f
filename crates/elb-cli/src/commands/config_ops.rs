use std::path::Path;

use crate::settings::{default_toml, init_custom_file, load_settings_file, Settings};

pub fn settings_export() {
    print!("{}", default_toml());
}

pub fn settings_validate(file: &str) {
    let (_, s) = die!(load_settings_file(Path::new(file)), "Error: {}");
    println!("OK: {}", summary(&s));
}

pub fn settings_install(file: &str) {
    die!(init_custom_file(Path::new(file)), "Error: {}");
}

fn summary(s: &Settings) -> String {
    format!(
        "output.json={}, output.pretty={}, output.breakdown={}",
        s.output.json, s.output.pretty, s.output.breakdown
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::parse_settings_toml;

    #[test]
    fn summary_lists_every_field() {
        let s = parse_settings_toml(default_toml()).unwrap();
        assert_eq!(
            summary(&s),
            "output.json=false, output.pretty=false, output.breakdown=false"
        );
    }
}
