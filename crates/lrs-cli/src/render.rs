//! Text rendering of search outcomes and suggestion lists.

use std::io::{self, Write};

use lrs_client::SearchOutcome;
use lrs_core::presentation::{
    distance_line, hype_line, rating_line, share_message, ALSO_IN_STRICT, CUISINE_PRESETS,
    EMPTY_STATE_HINT, EMPTY_STATE_TITLE, PHOTO_ATTRIBUTION, YELP_TIP,
};
use lrs_core::{LocationSuggestion, Mode, Pick};

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct CardOptions {
    pub why: bool,
    pub share: bool,
}

pub(crate) fn write_outcome<W: Write>(
    out: &mut W,
    outcome: &SearchOutcome,
    options: CardOptions,
) -> io::Result<()> {
    if options.why {
        writeln!(out, "{}", outcome.mode.why_text())?;
        writeln!(out)?;
    }

    if let Some(line) = &outcome.debug_line {
        writeln!(out, "{line}")?;
        writeln!(out)?;
    }

    if !outcome.note.is_empty() {
        writeln!(out, "ℹ️ Heads up")?;
        writeln!(out, "{}", outcome.note)?;
        writeln!(out)?;
    }

    if outcome.show_empty_state() {
        writeln!(out, "{EMPTY_STATE_TITLE}")?;
        writeln!(out, "{EMPTY_STATE_HINT}")?;
        return Ok(());
    }

    for pick in &outcome.picks {
        write_card(out, pick, outcome.mode, options.share)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_card<W: Write>(out: &mut W, pick: &Pick, mode: Mode, share: bool) -> io::Result<()> {
    if let Some(photo) = &pick.photo_url {
        writeln!(out, "[photo] {photo}")?;
        writeln!(out, "{PHOTO_ATTRIBUTION}")?;
    }

    writeln!(out, "{}", pick.name)?;
    writeln!(out, "{}", pick.location)?;
    if let Some(line) = distance_line(pick) {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{}", rating_line(pick))?;

    if pick.also_in_strict {
        writeln!(out, "{ALSO_IN_STRICT}")?;
    }
    for line in [&pick.why, &pick.confidence_explainer].into_iter().flatten() {
        writeln!(out, "{line}")?;
    }
    if let Some(line) = hype_line(pick, mode) {
        writeln!(out, "{line}")?;
    }
    if let Some(order) = &pick.order {
        writeln!(out, "{order}")?;
    }

    writeln!(out, "Google Maps: {}", pick.links.google_maps)?;
    writeln!(out, "Yelp (browser): {}", pick.links.yelp_search)?;
    if share {
        writeln!(out, "Share:")?;
        for line in share_message(&pick.name, &pick.links.google_maps).lines() {
            writeln!(out, "  {line}")?;
        }
    }
    writeln!(out, "{YELP_TIP}")
}

pub(crate) fn write_suggestions<W: Write>(
    out: &mut W,
    suggestions: &[LocationSuggestion],
) -> io::Result<()> {
    if suggestions.is_empty() {
        return writeln!(out, "No location suggestions.");
    }
    for (i, s) in suggestions.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, s.label)?;
    }
    Ok(())
}

/// One preset per line; the active one is marked with `*`.
pub(crate) fn write_presets<W: Write>(out: &mut W, active: Option<&str>) -> io::Result<()> {
    for preset in CUISINE_PRESETS {
        let marker = if active == Some(preset) { '*' } else { ' ' };
        writeln!(out, "{marker} {preset}")?;
    }
    Ok(())
}

pub(crate) fn write_json<W: Write>(out: &mut W, outcome: &SearchOutcome) -> io::Result<()> {
    let value = serde_json::json!({
        "mode": outcome.mode,
        "note": outcome.note,
        "debug_line": outcome.debug_line,
        "dropped": outcome.dropped,
        "picks": outcome.picks,
    });
    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)
}
