//! Plain-text rendering of a [`Listing`] and of the branch locator.
//!
//! Emphasized cards are marked with `>`, highlighted fields are wrapped in
//! `*`.

use std::io::{self, Write};

use crate::services::branches::{total_available, Branch};
use crate::services::format::pluralize;
use crate::services::listing::{Listing, SHOW_ALL_LABEL};

fn marked(text: &str, highlighted: bool) -> String {
    if highlighted {
        format!("*{}*", text)
    } else {
        text.to_string()
    }
}

fn card_prefix(emphasized: bool) -> &'static str {
    if emphasized {
        "> "
    } else {
        "  "
    }
}

pub fn write_listing<W: Write>(out: &mut W, listing: &Listing) -> io::Result<()> {
    if !listing.categories.is_empty() {
        writeln!(out, "Categories")?;
        for card in &listing.categories {
            writeln!(
                out,
                "{}{} ({})",
                card_prefix(card.is_emphasized()),
                marked(&card.category.name, card.highlighted),
                card.category.count
            )?;
        }
        writeln!(out)?;
    }

    if let Some(label) = &listing.label {
        writeln!(out, "{}", label)?;
    }

    for card in &listing.vehicles {
        let compact = if card.vehicle.is_compact {
            " (compact)"
        } else {
            ""
        };
        writeln!(
            out,
            "{}{} {}  {} {}{}",
            card_prefix(card.is_emphasized()),
            marked(&card.vehicle.brand, card.brand_highlighted),
            marked(&card.vehicle.model, card.model_highlighted),
            card.price_label,
            listing.price_unit,
            compact
        )?;
        if let Some(engine) = card.engine() {
            writeln!(out, "    Engine: {}", engine)?;
        }
    }

    if let Some(message) = &listing.no_results {
        writeln!(out, "{}", message)?;
        writeln!(out, "{} with `rentcar list`", SHOW_ALL_LABEL)?;
    }

    Ok(())
}

pub fn write_branches<W: Write>(out: &mut W, branches: &[Branch]) -> io::Result<()> {
    writeln!(out, "Our Branches")?;
    writeln!(out, "Find the nearest rentcar location")?;
    writeln!(
        out,
        "{}, {} total, 24/7 support",
        pluralize(branches.len(), "location"),
        pluralize(total_available(branches) as usize, "car")
    )?;

    for branch in branches {
        writeln!(out)?;
        writeln!(
            out,
            "{}  {} ({} availability)",
            branch.name,
            pluralize(branch.available_cars as usize, "car"),
            branch.availability().label()
        )?;
        writeln!(out, "    {} ({})", branch.address, branch.distance)?;
        writeln!(out, "    {}", branch.hours)?;
        if !branch.features.is_empty() {
            writeln!(out, "    {}", branch.features.join(", "))?;
        }
        writeln!(out, "    Call: {}", branch.call_url())?;
        writeln!(out, "    Directions: {}", branch.directions_url())?;
    }

    Ok(())
}
