use anyhow::Result;

use folio_core::{AppConfig, Portfolio};
use folio_tui::themes::available_themes;

/// Print what would be shown, after the content and config have validated
pub fn run(config: &AppConfig, portfolio: &Portfolio) -> Result<()> {
    let range = config.timeline.range()?;
    let links = portfolio
        .story
        .entries
        .iter()
        .map(|e| e.links.labelled().len())
        .sum::<usize>();
    let highlighted = portfolio.profile.headline.iter().filter(|w| w.highlight).count();

    println!("Content OK");
    println!("  name:        {}", portfolio.profile.name);
    println!(
        "  headline:    {} words ({} highlighted)",
        portfolio.profile.headline.len(),
        highlighted
    );
    println!("  nav items:   {}", portfolio.nav.len());
    println!("  projects:    {}", portfolio.projects.features.len());
    println!("  timeline:    {} entries, {} links", portfolio.story.entries.len(), links);
    println!();
    println!("Config OK");
    println!("  theme:       {}", config.ui.theme.name);
    let themes = available_themes();
    let name = config.ui.theme.name.to_lowercase();
    if name != "neutral" && !themes.contains(&name.as_str()) {
        println!("               unknown, falls back to neutral-dark ({})", themes.join(", "));
    }
    println!("  timeline:    {} -> {}", range.start, range.end);
    println!(
        "  navbar:      compact past {} units ({} per row)",
        config.navbar.compact_threshold, config.navbar.units_per_row
    );
    match &config.links.resume {
        Some(url) => println!("  resume:      {}", url),
        None => println!("  resume:      (not set)"),
    }
    match &config.links.contact {
        Some(url) => println!("  contact:     {}", url),
        None => println!("  contact:     (not set)"),
    }
    Ok(())
}
