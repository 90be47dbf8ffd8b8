//! Plain-text reports for alert collections and count summaries.

use std::io::{self, Write};

use crate::model::{AlertCollection, AlertCountSummary, AlertFeature};

const ALERT_RULE_WIDTH: usize = 80;
const INSTRUCTION_RULE_WIDTH: usize = 50;
const SUMMARY_RULE_WIDTH: usize = 40;
const AREAS_PER_LINE: usize = 4;

fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// Write every alert in API order, then the `<N> Alerts listed.` line.
pub fn write_alert_report<W: Write>(out: &mut W, collection: &AlertCollection) -> io::Result<()> {
    if !collection.features.is_empty() {
        writeln!(out, "{}", rule('=', ALERT_RULE_WIDTH))?;
    }

    for feature in &collection.features {
        write_feature(out, feature)?;
    }

    writeln!(out, "{} Alerts listed.", collection.features.len())
}

fn write_feature<W: Write>(out: &mut W, feature: &AlertFeature) -> io::Result<()> {
    let p = &feature.properties;

    let fields = [
        ("Event", p.event.as_str()),
        ("Headline", p.headline.as_str()),
        ("Category", p.category.as_str()),
        ("Message Type", p.message_type.as_str()),
        ("Urgency", p.urgency.as_str()),
        ("Certainty", p.certainty.as_str()),
        ("Type", p.at_type.as_str()),
        ("Sent", p.sent.as_str()),
        ("Effective", p.effective.as_str()),
        ("Onset", p.onset.as_str()),
        ("Expires", p.expires.as_str()),
    ];
    for (label, value) in fields {
        writeln!(out, "{label:<16}: {value}")?;
    }

    writeln!(out, "{:<16}: {} ({})", "Sender", p.sender_name, p.sender)?;
    writeln!(out, "{:<16}: {}", "Area Description", p.area_desc)?;
    writeln!(out, "{:<16}:\n{}", "Description", p.description)?;

    if !p.instruction.is_empty() {
        writeln!(out, "{}", rule('-', INSTRUCTION_RULE_WIDTH))?;
        writeln!(out, "{:<16}: {}", "Instructions", p.instruction)?;
    }

    writeln!(out, "{}", rule('=', ALERT_RULE_WIDTH))
}

/// Write totals and the per-area grid, areas sorted by code.
pub fn write_count_report<W: Write>(out: &mut W, summary: &AlertCountSummary) -> io::Result<()> {
    writeln!(out, "{}", rule('=', SUMMARY_RULE_WIDTH))?;
    writeln!(out, "Active Alert Counts")?;
    writeln!(out, "{}", rule('=', SUMMARY_RULE_WIDTH))?;
    writeln!(out, "Total  : {}", summary.total)?;
    writeln!(out, "Land   : {}", summary.land)?;
    writeln!(out, "Marine : {}", summary.marine)?;
    writeln!(out)?;
    writeln!(out, "Alerts per Area")?;
    writeln!(out, "{}", rule('-', SUMMARY_RULE_WIDTH))?;

    let mut areas: Vec<(&String, &u64)> = summary.areas.iter().collect();
    areas.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (i, (area, count)) in areas.iter().enumerate() {
        write!(out, " {area} : {count:>3} ")?;
        if (i + 1) % AREAS_PER_LINE == 0 {
            writeln!(out)?;
        }
    }
    if areas.len() % AREAS_PER_LINE != 0 {
        writeln!(out)?;
    }

    Ok(())
}

pub fn print_alert_report(collection: &AlertCollection) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_alert_report(&mut stdout, collection)?;
    stdout.flush()
}

pub fn print_count_report(summary: &AlertCountSummary) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_count_report(&mut stdout, summary)?;
    stdout.flush()
}
