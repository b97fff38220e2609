//! Arrangement search.
//!
//! Enumerates orderings of the own force in lexicographic index order,
//! pairs each ordering position-by-position against the opponent's fixed
//! order, and accepts the first ordering that wins a strict majority of the
//! paired positions. The search is satisficing: the first qualifying
//! ordering is returned, not the one with the most wins.
//!
//! Cost is O(n! * n) for an own force of n groups, so this is only meant
//! for a handful of groups per side. Callers that need a bound should set
//! `SearchConfig::movetime` or `SearchConfig::max_orderings`, or raise the
//! stop flag.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rayon::prelude::*;
use serde::Serialize;

use super::permutation::{factorial, Permutations};
use crate::board::{AdvantageRules, Force, Group, STANDARD_RULES};
use crate::resolve::{compare_with, pairwise, MatchupResult, Tally};

/// Limits and parallelism for one search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Worker threads. 1 runs the sequential driver.
    pub threads: usize,
    /// Wall-clock budget. `None` means unlimited.
    pub movetime: Option<Duration>,
    /// Cap on orderings evaluated. `None` means unlimited.
    pub max_orderings: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            threads: 1,
            movetime: None,
            max_orderings: None,
        }
    }
}

/// How the two forces were paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pairing {
    /// Both forces have the same number of groups.
    Full { positions: usize },
    /// Lengths differ; only the first `positions` slots were paired.
    Truncated {
        own: usize,
        opponent: usize,
        positions: usize,
    },
}

impl Pairing {
    pub fn of(own: usize, opponent: usize) -> Self {
        if own == opponent {
            Pairing::Full { positions: own }
        } else {
            Pairing::Truncated {
                own,
                opponent,
                positions: own.min(opponent),
            }
        }
    }

    /// Number of paired positions.
    pub fn positions(&self) -> usize {
        match *self {
            Pairing::Full { positions } | Pairing::Truncated { positions, .. } => positions,
        }
    }

    /// Wins required to accept an ordering: a strict majority of positions.
    pub fn threshold(&self) -> usize {
        self.positions() / 2 + 1
    }

    pub fn is_truncated(&self) -> bool {
        matches!(self, Pairing::Truncated { .. })
    }
}

/// An accepted ordering of the own force.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arrangement {
    /// Indices into the own force, in arranged order.
    pub order: Vec<usize>,
    /// The own groups in arranged order, including any unpaired tail.
    pub groups: Vec<Group>,
    /// Result for each paired position.
    pub results: Vec<MatchupResult>,
    pub tally: Tally,
    /// Zero-based position of this ordering in the enumeration.
    pub rank: u64,
}

/// Terminal state of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// The first ordering that reached the majority threshold.
    Found(Arrangement),
    /// Every ordering was tried and none reached the threshold.
    NoSolution,
    /// A limit or the stop flag ended the search before it could decide.
    Interrupted,
}

/// Counters for one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Orderings evaluated. Under the parallel driver this includes work
    /// done by blocks that were later discarded.
    pub orderings: u64,
    pub elapsed_ms: u64,
}

/// Result of `search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub verdict: Verdict,
    pub pairing: Pairing,
    pub stats: SearchStats,
}

impl SearchOutcome {
    pub fn arrangement(&self) -> Option<&Arrangement> {
        match &self.verdict {
            Verdict::Found(a) => Some(a),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self.verdict, Verdict::Found(_))
    }
}

/// Searches with the standard table, default config, and no stop flag.
pub fn search(own: &Force, opponent: &Force) -> SearchOutcome {
    search_with(
        own,
        opponent,
        &STANDARD_RULES,
        &SearchConfig::default(),
        &AtomicBool::new(false),
    )
}

/// Searches for an ordering of `own` that wins a strict majority of the
/// positions paired against `opponent`.
///
/// Raising `stop` from another thread ends the search with
/// `Verdict::Interrupted` unless it has already decided.
pub fn search_with(
    own: &Force,
    opponent: &Force,
    rules: &AdvantageRules,
    config: &SearchConfig,
    stop: &AtomicBool,
) -> SearchOutcome {
    let start = Instant::now();
    let pairing = Pairing::of(own.len(), opponent.len());
    if let Pairing::Truncated {
        own: a,
        opponent: b,
        positions,
    } = pairing
    {
        warn!("force lengths differ (own {a}, opponent {b}); pairing only the first {positions}");
    }

    // Nothing paired means zero wins, which never reaches the threshold of 1.
    if pairing.positions() == 0 {
        debug!("no paired positions; reporting no solution");
        return SearchOutcome {
            verdict: Verdict::NoSolution,
            pairing,
            stats: SearchStats::default(),
        };
    }

    let ctx = Context {
        own: own.groups(),
        opponent: opponent.groups(),
        rules,
        threshold: pairing.threshold(),
        limits: Limits {
            stop,
            deadline: config.movetime.map(|d| start + d),
            max_orderings: config.max_orderings,
            tried: AtomicU64::new(0),
        },
    };

    debug!(
        "searching {} orderings of {} groups for {} of {} wins",
        factorial(own.len()).map_or_else(|| "more than u64::MAX".to_string(), |n| n.to_string()),
        own.len(),
        ctx.threshold,
        pairing.positions(),
    );

    let verdict = if config.threads > 1 && own.len() > 1 {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()
        {
            Ok(pool) => {
                info!("parallel search on {} threads", config.threads);
                pool.install(|| search_parallel(&ctx))
            }
            Err(e) => {
                warn!("failed to build thread pool ({e}); searching sequentially");
                search_sequential(&ctx)
            }
        }
    } else {
        search_sequential(&ctx)
    };

    let stats = SearchStats {
        orderings: ctx.limits.tried.load(Ordering::Relaxed),
        elapsed_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
    };
    match &verdict {
        Verdict::Found(a) => debug!(
            "accepted ordering #{} with {} wins, {} draws, {} losses",
            a.rank, a.tally.wins, a.tally.draws, a.tally.losses
        ),
        Verdict::NoSolution => debug!("no ordering reaches the threshold"),
        Verdict::Interrupted => debug!("interrupted after {} orderings", stats.orderings),
    }

    SearchOutcome {
        verdict,
        pairing,
        stats,
    }
}

/// Shared, read-only inputs of one search.
struct Context<'a> {
    own: &'a [Group],
    opponent: &'a [Group],
    rules: &'a AdvantageRules,
    threshold: usize,
    limits: Limits<'a>,
}

struct Limits<'a> {
    stop: &'a AtomicBool,
    deadline: Option<Instant>,
    max_orderings: Option<u64>,
    tried: AtomicU64,
}

impl Limits<'_> {
    /// Claims the ordering at enumeration position `rank`. Returns false
    /// once a limit fires.
    ///
    /// The ordering cap is checked against `rank`, not arrival order, so
    /// every driver cuts the enumeration at the same ordering.
    fn claim(&self, rank: u64) -> bool {
        if self.max_orderings.is_some_and(|max| rank >= max) {
            return false;
        }
        let prior = self.tried.fetch_add(1, Ordering::Relaxed);
        // Clock and flag are checked every 64 orderings.
        if prior & 63 == 0
            && (self.stop.load(Ordering::Relaxed)
                || self.deadline.is_some_and(|d| Instant::now() >= d))
        {
            self.tried.fetch_sub(1, Ordering::Relaxed);
            return false;
        }
        true
    }
}

/// Outcome of scanning one block of orderings.
enum Scan {
    Found { order: Vec<usize>, rank: u64 },
    Exhausted,
    Interrupted,
    /// A lower block already found a solution.
    Abandoned,
}

impl Context<'_> {
    fn wins(&self, order: &[usize]) -> usize {
        order
            .iter()
            .zip(self.opponent)
            .filter(|&(&i, opp)| compare_with(&self.own[i], opp, self.rules) == MatchupResult::Win)
            .count()
    }

    /// Scans `perms`, whose first ordering sits at enumeration position
    /// `offset`.
    fn scan(&self, mut perms: Permutations, offset: u64, abandon: impl Fn() -> bool) -> Scan {
        let mut rank = offset;
        while let Some(order) = perms.next_order() {
            if abandon() {
                return Scan::Abandoned;
            }
            if !self.limits.claim(rank) {
                return Scan::Interrupted;
            }
            if self.wins(order) >= self.threshold {
                return Scan::Found {
                    order: order.to_vec(),
                    rank,
                };
            }
            rank = rank.saturating_add(1);
        }
        Scan::Exhausted
    }

    fn arrangement(&self, order: Vec<usize>, rank: u64) -> Arrangement {
        let groups: Vec<Group> = order.iter().map(|&i| self.own[i]).collect();
        let results: Vec<MatchupResult> = pairwise(&groups, self.opponent, self.rules).collect();
        let tally = results.iter().copied().collect();
        Arrangement {
            order,
            groups,
            results,
            tally,
            rank,
        }
    }
}

fn search_sequential(ctx: &Context<'_>) -> Verdict {
    match ctx.scan(Permutations::new(ctx.own.len()), 0, || false) {
        Scan::Found { order, rank } => Verdict::Found(ctx.arrangement(order, rank)),
        Scan::Exhausted => Verdict::NoSolution,
        Scan::Interrupted | Scan::Abandoned => Verdict::Interrupted,
    }
}

/// Scans each leading-index block on its own worker. Blocks are
/// contiguous in enumeration order, so the solution from the lowest block
/// is the one the sequential driver would return. A block stops early
/// once any lower block has found a solution.
fn search_parallel(ctx: &Context<'_>) -> Verdict {
    let n = ctx.own.len();
    let block_size = factorial(n - 1).unwrap_or(u64::MAX);
    let lowest_found = AtomicUsize::new(usize::MAX);

    let scans: Vec<Scan> = (0..n)
        .into_par_iter()
        .map(|first| {
            let offset = (first as u64).saturating_mul(block_size);
            let scan = ctx.scan(Permutations::with_leading(n, first), offset, || {
                lowest_found.load(Ordering::Relaxed) < first
            });
            if matches!(scan, Scan::Found { .. }) {
                lowest_found.fetch_min(first, Ordering::Relaxed);
            }
            scan
        })
        .collect();

    for scan in scans {
        match scan {
            Scan::Found { order, rank } => return Verdict::Found(ctx.arrangement(order, rank)),
            Scan::Exhausted => continue,
            // An earlier block that did not finish cannot be ruled out.
            Scan::Interrupted | Scan::Abandoned => return Verdict::Interrupted,
        }
    }
    Verdict::NoSolution
}
