//! `robohash formats` – list accepted option values.

use robohash_core::{BackgroundSet, GravatarMode, ImageExtension, ImageSet};

pub fn run_formats() {
    let sets: Vec<String> = ImageSet::ALL
        .iter()
        .map(|s| format!("{} ({})", s.name(), s.url_value()))
        .collect();
    let bgs: Vec<String> = BackgroundSet::ALL
        .iter()
        .map(|b| format!("{} ({})", b.name(), b.url_value()))
        .collect();
    let exts: Vec<&str> = ImageExtension::ALL.iter().map(|e| e.name()).collect();
    let modes: Vec<&str> = GravatarMode::ALL.iter().map(|m| m.url_value()).collect();

    println!("--set       {}", sets.join(", "));
    println!("--bg        {}", bgs.join(", "));
    println!("--ext       {}", exts.join(", "));
    println!("--gravatar  {}", modes.join(", "));
}
