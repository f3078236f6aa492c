/*!
 * # Row Grouping
 *
 * Turns an ordered sequence of card styles into the rows of the grid.
 *
 * ## Pieces
 *
 * - **`policy`**: the `(previous, current, next) -> GroupDecision` rule table.
 *   Stateless and total; the `GroupingPolicy` trait lets a front end swap in
 *   a different table.
 * - **`partition`**: walks the styles once with one card of lookahead and
 *   emits `Group`s. Every card lands in exactly one group, in order.
 * - **`frames`**: converts groups into concrete rectangles for a container
 *   width, using `LayoutMetrics`.
 *
 * ## Usage Pattern
 *
 * ```rust
 * use device_cards_engine::layout::{GroupShape, partition};
 * use device_cards_engine::models::CardStyle::{Basic, Complex};
 *
 * let groups = partition(&[Complex, Basic, Basic, Complex]);
 * let shapes: Vec<_> = groups.iter().map(|g| g.shape).collect();
 * assert_eq!(
 *     shapes,
 *     [GroupShape::Emphasized, GroupShape::PairedCompact, GroupShape::Emphasized]
 * );
 * ```
 *
 * Partitioning holds no state between calls, so the board simply re-runs it
 * against whichever sequence is current, including the proposed order while
 * a drag is in flight.
 */

pub mod frames;
pub mod partition;
pub mod policy;

pub use frames::{CellFrame, LayoutMetrics, RowFrame, compute_frames, content_height};
pub use partition::{Group, GroupShape, partition, partition_with};
pub use policy::{DeviceCardPolicy, GroupDecision, GroupingPolicy, decide};
