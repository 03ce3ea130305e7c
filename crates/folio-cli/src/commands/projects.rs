use anyhow::Result;

use folio_core::content::GRID_COLUMNS;
use folio_core::Portfolio;

pub fn run(portfolio: &Portfolio) -> Result<()> {
    let projects = &portfolio.projects;

    println!("{}", projects.heading);
    if !projects.intro.is_empty() {
        println!("{}", projects.intro);
    }
    println!();

    if projects.features.is_empty() {
        println!("No projects yet.");
        return Ok(());
    }

    let mut column = 0;
    for feature in &projects.features {
        if column + feature.span > GRID_COLUMNS {
            column = 0;
        }
        let row_start = if column == 0 { "┌" } else { "├" };
        println!("{} {} [{}/{}]", row_start, feature.title, feature.span, GRID_COLUMNS);
        println!("  {}", feature.description);
        if !feature.tags.is_empty() {
            println!("  tags: {}", feature.tags.join(", "));
        }
        if let Some(link) = &feature.link {
            println!("  ↗ {}", link);
        }
        column = (column + feature.span) % GRID_COLUMNS;
        println!();
    }

    Ok(())
}
