use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::cell::State;
use crate::error::{LifeError, Result};

/// Largest possible live-neighbour count in a Moore neighbourhood
pub const MAX_NEIGHBOURS: i32 = 8;

/// Inclusive range of live-neighbour counts, always within `[0, 8]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NeighbourRange {
    min: u8,
    max: u8,
}

impl NeighbourRange {
    /// Build a range, rejecting bounds outside `[0, 8]` or reversed bounds.
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min < 0 || max > MAX_NEIGHBOURS || min > max {
            return Err(LifeError::Range { min, max });
        }
        Ok(Self {
            min: min as u8,
            max: max as u8,
        })
    }

    /// Unchecked constructor for the built-in rules
    const fn span(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub const fn min(&self) -> u8 {
        self.min
    }

    pub const fn max(&self) -> u8 {
        self.max
    }

    #[inline]
    pub const fn contains(&self, count: u8) -> bool {
        self.min <= count && count <= self.max
    }
}

/// Outer-totalistic rule: which counts give birth and which let a cell survive.
///
/// Immutable once built. Equality and hashing go through the canonical rule
/// string, so `S23/B3`, `b3/s23` and `B3/S23` are the same rule.
#[derive(Clone, Debug)]
pub struct RuleSet {
    birth: Vec<NeighbourRange>,
    survive: Vec<NeighbourRange>,
    rule_string: String,
    /// Precomputed outcome per neighbour count: `[dead, alive]`
    lookup: [[bool; 9]; 2],
}

impl RuleSet {
    /// Build a rule set from validated ranges.
    /// Overlapping or repeated ranges are allowed; membership is a union.
    pub fn new(birth: Vec<NeighbourRange>, survive: Vec<NeighbourRange>) -> Self {
        let lookup = [build_lookup(&birth), build_lookup(&survive)];
        let rule_string = format!(
            "B{}/S{}",
            digits_of(&lookup[0]),
            digits_of(&lookup[1])
        );
        Self {
            birth,
            survive,
            rule_string,
            lookup,
        }
    }

    /// Conway's Game of Life (B3/S23)
    pub fn conway() -> Self {
        Self::new(vec![NeighbourRange::span(3, 3)], vec![NeighbourRange::span(2, 3)])
    }

    /// HighLife (B36/S23): replicators
    pub fn high_life() -> Self {
        Self::new(
            vec![NeighbourRange::span(3, 3), NeighbourRange::span(6, 6)],
            vec![NeighbourRange::span(2, 3)],
        )
    }

    /// Seeds (B2/S): nothing survives
    pub fn seeds() -> Self {
        Self::new(vec![NeighbourRange::span(2, 2)], Vec::new())
    }

    /// Day & Night (B3678/S34678): symmetric under inversion
    pub fn day_and_night() -> Self {
        Self::new(
            vec![NeighbourRange::span(3, 3), NeighbourRange::span(6, 8)],
            vec![NeighbourRange::span(3, 4), NeighbourRange::span(6, 8)],
        )
    }

    /// Apply the rule to one cell.
    ///
    /// Alive cells survive when the count falls in any survive range, dead
    /// cells are born when it falls in any birth range.
    #[inline]
    pub fn evaluate(&self, alive: bool, live_neighbours: u8) -> bool {
        self.lookup[alive as usize]
            .get(live_neighbours as usize)
            .copied()
            .unwrap_or(false)
    }

    /// Same as [`RuleSet::evaluate`] over a [`State`]
    #[inline]
    pub fn evolve(&self, current: State, live_neighbours: u8) -> State {
        State::from(self.evaluate(current.is_alive(), live_neighbours))
    }

    pub fn birth(&self) -> &[NeighbourRange] {
        &self.birth
    }

    pub fn survive(&self) -> &[NeighbourRange] {
        &self.survive
    }

    /// Canonical `B<digits>/S<digits>` form
    pub fn rule_string(&self) -> &str {
        &self.rule_string
    }
}

fn build_lookup(ranges: &[NeighbourRange]) -> [bool; 9] {
    let mut table = [false; 9];
    for count in 0u8..=8 {
        table[count as usize] = ranges.iter().any(|r| r.contains(count));
    }
    table
}

fn digits_of(table: &[bool; 9]) -> String {
    table
        .iter()
        .enumerate()
        .filter(|&(_, &on)| on)
        .map(|(count, _)| char::from(b'0' + count as u8))
        .collect()
}

/// Collapse sorted, deduplicated counts into maximal inclusive ranges.
fn ranges_from_counts(counts: &[u8]) -> Result<Vec<NeighbourRange>> {
    let mut ranges = Vec::new();
    let mut iter = counts.iter().copied().peekable();
    while let Some(start) = iter.next() {
        let mut end = start;
        while iter.peek() == Some(&(end + 1)) {
            end += 1;
            iter.next();
        }
        ranges.push(NeighbourRange::new(start as i32, end as i32)?);
    }
    Ok(ranges)
}

fn parse_counts(group: &str) -> Result<Vec<u8>> {
    let mut counts = Vec::with_capacity(group.len());
    for ch in group.chars() {
        let digit = ch
            .to_digit(10)
            .ok_or_else(|| LifeError::parse(format!("unexpected '{ch}' in rule string")))?;
        if digit as i32 > MAX_NEIGHBOURS {
            return Err(LifeError::Range {
                min: digit as i32,
                max: digit as i32,
            });
        }
        counts.push(digit as u8);
    }
    counts.sort_unstable();
    counts.dedup();
    Ok(counts)
}

impl FromStr for RuleSet {
    type Err = LifeError;

    /// Accepts `B3/S23`, `S23/B3` in any letter case, and the letterless
    /// survive/birth form `23/3`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LifeError::validation("rule must be defined"));
        }
        let upper = trimmed.to_ascii_uppercase();
        let groups: Vec<&str> = upper.split('/').map(str::trim).collect();
        let [first, second] = groups[..] else {
            return Err(LifeError::parse(format!(
                "rule '{trimmed}' must have exactly two '/'-separated groups"
            )));
        };

        let lettered = |g: &str| g.starts_with('B') || g.starts_with('S');
        let (birth, survive) = match (lettered(first), lettered(second)) {
            (true, true) => {
                let (mut birth, mut survive) = (None, None);
                for group in [first, second] {
                    let (slot, digits) = match group.split_at(1) {
                        ("B", rest) => (&mut birth, rest),
                        (_, rest) => (&mut survive, rest),
                    };
                    if slot.replace(parse_counts(digits)?).is_some() {
                        return Err(LifeError::parse(format!(
                            "rule '{trimmed}' repeats the same group"
                        )));
                    }
                }
                (birth.unwrap_or_default(), survive.unwrap_or_default())
            }
            (false, false) => (parse_counts(second)?, parse_counts(first)?),
            _ => {
                return Err(LifeError::parse(format!(
                    "rule '{trimmed}' mixes lettered and letterless groups"
                )));
            }
        };

        Ok(Self::new(
            ranges_from_counts(&birth)?,
            ranges_from_counts(&survive)?,
        ))
    }
}

impl PartialEq for RuleSet {
    fn eq(&self, other: &Self) -> bool {
        self.rule_string == other.rule_string
    }
}

impl Eq for RuleSet {}

impl Hash for RuleSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rule_string.hash(state);
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rule_string)
    }
}
