use anyhow::Result;

use folio_core::Portfolio;

pub fn run(portfolio: &Portfolio, json: bool) -> Result<()> {
    let story = &portfolio.story;

    if json {
        println!("{}", serde_json::to_string_pretty(story)?);
        return Ok(());
    }

    let heading: Vec<&str> = story.heading.iter().map(|w| w.text.as_str()).collect();
    println!("{}", heading.join(" "));
    if !story.intro.is_empty() {
        println!("{}", story.intro);
    }
    println!();

    if story.entries.is_empty() {
        println!("No timeline entries yet.");
        return Ok(());
    }

    for entry in &story.entries {
        println!("● {} ({})", entry.title, entry.subtitle);
        println!("  {}", entry.content);
        for highlight in &entry.highlights {
            println!("  • {}", highlight);
        }
        for (label, url) in entry.links.labelled() {
            println!("  ↗ {}: {}", label, url);
        }
        println!();
    }

    Ok(())
}
