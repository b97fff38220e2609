//! Battle report rendering.
//!
//! Turns a `SearchOutcome` into the human-readable battle log, or into
//! JSON for machine consumers.

use std::io::{self, Write};

use super::army::format_groups;
use crate::board::Force;
use crate::search::{Pairing, SearchOutcome, Verdict};

/// Text printed when no ordering reaches the threshold.
pub const NO_SOLUTION_TEXT: &str = "There is no chance of winning";

/// Writes the battle log and result summary for `outcome`.
pub fn write_report<W: Write>(
    out: &mut W,
    outcome: &SearchOutcome,
    opponent: &Force,
) -> io::Result<()> {
    if let Verdict::Found(arrangement) = &outcome.verdict {
        writeln!(out)?;
        writeln!(out, "Battle Outcomes:")?;
        let battles = arrangement
            .groups
            .iter()
            .zip(opponent.groups())
            .zip(&arrangement.results);
        for (i, ((own, opp), result)) in battles.enumerate() {
            writeln!(out, "Battle {}: {} vs {} → {}", i + 1, own, opp, result)?;
        }
    }

    if let Pairing::Truncated {
        own,
        opponent,
        positions,
    } = outcome.pairing
    {
        writeln!(
            out,
            "Note: only the first {} of own={} / opponent={} groups were paired",
            positions, own, opponent
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Result:")?;
    let tally = match &outcome.verdict {
        Verdict::Found(arrangement) => {
            writeln!(out, "{}", format_groups(&arrangement.groups))?;
            arrangement.tally
        }
        Verdict::NoSolution => {
            writeln!(out, "{}", NO_SOLUTION_TEXT)?;
            Default::default()
        }
        Verdict::Interrupted => {
            writeln!(
                out,
                "Search interrupted after {} orderings",
                outcome.stats.orderings
            )?;
            Default::default()
        }
    };
    writeln!(
        out,
        "Wins: {}, Draws: {}, Losses: {}",
        tally.wins, tally.draws, tally.losses
    )?;
    out.flush()
}

/// Writes `outcome` as a single line of JSON.
pub fn write_json<W: Write>(out: &mut W, outcome: &SearchOutcome) -> io::Result<()> {
    serde_json::to_writer(&mut *out, outcome)?;
    writeln!(out)?;
    out.flush()
}
