use anyhow::Result;
use aidfind::SessionOutcome;
use serde_json::json;

/// Print a plain-text summary of the session.
pub(crate) fn print_plain(outcome: &SessionOutcome) {
    match &outcome.category {
        Some(category) => {
            println!("Category: {category}");
            if outcome.types.is_empty() {
                println!("Types of assistance: (all)");
            } else {
                println!("Types of assistance: {}", outcome.types.join(", "));
            }
            println!("Matching organizations: {}", outcome.matches);
        }
        None => println!("No category selected"),
    }
}

/// Format the session summary as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SessionOutcome) -> Result<String> {
    let payload = json!({
        "category": outcome.category,
        "types": outcome.types,
        "matches": outcome.matches,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session summary.
pub(crate) fn print_json(outcome: &SessionOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}
