use std::ops::Range;

use serde::Serialize;

use super::policy::{DeviceCardPolicy, GroupDecision, GroupingPolicy};
use crate::models::CardStyle;

/// Shape of a single row in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GroupShape {
    /// Two basic cards side by side.
    PairedCompact,
    /// One basic card across the full width at reduced height.
    OrphanBasic,
    /// One complex card across the full width at full height.
    Emphasized,
}

impl GroupShape {
    /// Number of cards a row of this shape holds.
    pub fn item_count(self) -> usize {
        match self {
            GroupShape::PairedCompact => 2,
            GroupShape::OrphanBasic | GroupShape::Emphasized => 1,
        }
    }

    /// Width of each cell as a fraction of the row width.
    pub fn cell_width_fraction(self) -> f64 {
        match self {
            GroupShape::PairedCompact => 0.5,
            GroupShape::OrphanBasic | GroupShape::Emphasized => 1.0,
        }
    }
}

/// One row of the grid, covering consecutive indices of the working sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Group {
    pub shape: GroupShape,
    pub range: Range<usize>,
}

impl Group {
    fn single(shape: GroupShape, index: usize) -> Self {
        Self {
            shape,
            range: index..index + 1,
        }
    }

    fn pair(index: usize) -> Self {
        Self {
            shape: GroupShape::PairedCompact,
            range: index..index + 2,
        }
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range.contains(&index)
    }
}

/// Split a style sequence into rows using the device card rules.
pub fn partition(styles: &[CardStyle]) -> Vec<Group> {
    partition_with(&DeviceCardPolicy, styles)
}

/// Split a style sequence into rows, asking `policy` about each window.
///
/// Single pass with one card of lookahead. The `previous` style fed to the
/// policy is the style of the last card that opened a row; it is cleared after
/// a pair so the card following a pair may open a fresh one.
///
/// # Panics
///
/// If the policy answers [`GroupDecision::StartPair`] for the last card, or
/// [`GroupDecision::Skip`] for a card that is not the tail of a pair.
pub fn partition_with<P: GroupingPolicy + ?Sized>(policy: &P, styles: &[CardStyle]) -> Vec<Group> {
    let mut groups = Vec::with_capacity(styles.len());
    let mut previous = None;
    let mut pair_tail = false;

    for (index, &current) in styles.iter().enumerate() {
        let next = styles.get(index + 1).copied();

        let decision = if pair_tail {
            GroupDecision::Skip
        } else {
            policy.decide(previous, current, next)
        };

        match decision {
            GroupDecision::StartPair => {
                assert!(
                    next.is_some(),
                    "grouping policy started a pair at the last card (index {index})"
                );
                groups.push(Group::pair(index));
                pair_tail = true;
            }
            GroupDecision::StandaloneOrphan => {
                groups.push(Group::single(GroupShape::OrphanBasic, index));
                previous = Some(current);
            }
            GroupDecision::StandaloneEmphasized => {
                groups.push(Group::single(GroupShape::Emphasized, index));
                previous = Some(current);
            }
            GroupDecision::Skip => {
                assert!(
                    pair_tail,
                    "grouping policy skipped card {index} which no pair covers"
                );
                previous = None;
                pair_tail = false;
            }
        }
    }

    log::trace!("Partitioned {} cards into {} rows", styles.len(), groups.len());
    groups
}
