use crate::models::CardStyle;

/// What to do with the card at the current window position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupDecision {
    /// Start a two-wide row with the current card and the next one.
    StartPair,
    /// Lay the current basic card out alone across the full width.
    StandaloneOrphan,
    /// Lay the current complex card out alone at full size.
    StandaloneEmphasized,
    /// The current card already belongs to the row started by the previous card.
    Skip,
}

/// Decides the row shape for a card from its immediate neighbours.
///
/// `previous` is the style of the last card that opened a row, or `None` at the
/// start of the sequence and directly after a pair. `next` is `None` for the
/// last card.
pub trait GroupingPolicy {
    fn decide(
        &self,
        previous: Option<CardStyle>,
        current: CardStyle,
        next: Option<CardStyle>,
    ) -> GroupDecision;
}

/// Rule table for the device card grid.
///
/// Basic cards pair up two per row when both are basic. A basic card next to a
/// complex one renders as an orphan. Complex cards always get a row to themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeviceCardPolicy;

impl GroupingPolicy for DeviceCardPolicy {
    fn decide(
        &self,
        previous: Option<CardStyle>,
        current: CardStyle,
        next: Option<CardStyle>,
    ) -> GroupDecision {
        use CardStyle::{Basic, Complex};
        use GroupDecision::{Skip, StandaloneEmphasized, StandaloneOrphan, StartPair};

        let Some(next) = next else {
            return match current {
                Basic => StandaloneOrphan,
                Complex => StandaloneEmphasized,
            };
        };

        match (previous, current, next) {
            (None, Basic, Basic) => StartPair,
            (None, Basic, Complex) => StandaloneOrphan,
            (Some(Basic), Basic, Basic) => Skip,
            (Some(Basic), Basic, Complex) => Skip,
            (Some(Complex), Basic, Basic) => StartPair,
            (Some(Complex), Basic, Complex) => StandaloneOrphan,
            (_, Complex, _) => StandaloneEmphasized,
        }
    }
}

/// Convenience entry point for the default rule table.
pub fn decide(
    previous: Option<CardStyle>,
    current: CardStyle,
    next: Option<CardStyle>,
) -> GroupDecision {
    DeviceCardPolicy.decide(previous, current, next)
}
