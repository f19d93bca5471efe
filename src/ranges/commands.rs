use std::{collections::HashSet, fs, path::PathBuf};

use anyhow::{bail, Result};
use chrono::NaiveDate;

use crate::ranges::{
    data,
    registry::{Registry, QUICK_RANGES_KEY},
    PresetRange,
};

pub fn all(registry: &Registry) -> Result<()> {
    let presets = registry.get(QUICK_RANGES_KEY)?;
    for section in sections_of(presets) {
        println!("{}:", data::section_title(section));
        for preset in presets.iter().filter(|preset| preset.section == section) {
            println!("  {preset}");
        }
    }
    Ok(())
}

pub fn sections(registry: &Registry) -> Result<()> {
    let presets = registry.get(QUICK_RANGES_KEY)?;
    for section in sections_of(presets) {
        let count = presets
            .iter()
            .filter(|preset| preset.section == section)
            .count();
        println!("{section}. {} ({count} presets)", data::section_title(section));
    }
    Ok(())
}

pub fn show(registry: &Registry, display: String) -> Result<()> {
    let presets = registry.get(QUICK_RANGES_KEY)?;
    for preset in presets {
        if preset.display == display {
            println!("{preset}");
            println!("from: {}", preset.from);
            println!("to: {}", preset.to);
            println!(
                "section: {} ({})",
                preset.section,
                data::section_title(preset.section)
            );
            return Ok(());
        }
    }
    bail!("error: No preset with this label exists");
}

pub fn section(registry: &Registry, index: u32) -> Result<()> {
    let presets = registry.get(QUICK_RANGES_KEY)?;
    let matching: Vec<_> = presets
        .iter()
        .filter(|preset| preset.section == index)
        .collect();
    if matching.is_empty() {
        println!("There are no presets in section {index}");
    } else {
        println!("{}:", data::section_title(index));
        for preset in matching {
            println!("  {preset}");
        }
    }
    Ok(())
}

pub fn export(registry: &Registry, output: Option<PathBuf>) -> Result<()> {
    let presets = registry.get(QUICK_RANGES_KEY)?;
    let json = serde_json::to_string_pretty(presets)?;
    if let Some(path) = output {
        fs::write(&path, json)?;
        println!("Exported {} presets to {}", presets.len(), path.display());
    } else {
        println!("{json}");
    }
    Ok(())
}

pub fn check(registry: &Registry) -> Result<()> {
    let presets = registry.get(QUICK_RANGES_KEY)?;
    let mut seen = HashSet::new();
    for preset in presets {
        if preset.from.is_empty() || preset.to.is_empty() || preset.display.is_empty() {
            bail!("error: A preset has an empty field: {preset:?}");
        }
        if !seen.insert(preset.display) {
            bail!("error: Two presets share the label \"{}\"", preset.display);
        }
        for bound in [preset.from, preset.to] {
            if !data::is_date_math(bound)
                && NaiveDate::parse_from_str(bound, "%Y-%m-%d").is_err()
            {
                bail!(
                    "error: Preset \"{}\" has a malformed date \"{bound}\"",
                    preset.display
                );
            }
        }
    }
    println!("All {} presets are valid", presets.len());
    Ok(())
}

fn sections_of(presets: &[PresetRange]) -> Vec<u32> {
    let mut sections: Vec<_> = presets.iter().map(|preset| preset.section).collect();
    sections.sort_unstable();
    sections.dedup();
    sections
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::ranges::data;

    #[test]
    fn export_keeps_the_host_field_shape() {
        let value = serde_json::to_value(data::quick_ranges()).unwrap();
        let presets = value.as_array().unwrap();
        assert_eq!(presets.len(), 34);
        assert_eq!(
            presets[0],
            json!({"from": "now/d", "to": "now/d", "display": "Today", "section": 0})
        );
        assert_eq!(
            presets[33],
            json!({"from": "2016-01-01", "to": "2016-12-31", "display": "2016", "section": 4})
        );
    }
}
