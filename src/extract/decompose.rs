//! Split a news region into its repeating entry blocks.

use super::document::Node;
use super::locator::Locator;

/// Candidate blocks scanned per document. Larger than the output cap because
/// keyword filtering runs after decomposition.
pub const DEFAULT_MAX_BLOCKS: usize = 80;

/// Lazily yield up to `max_blocks` blocks under `region`, in document order.
///
/// A region with no blocks is valid and yields nothing.
pub fn decompose<'a, 's>(
    region: Node<'a>,
    block: &'s Locator,
    max_blocks: usize,
) -> impl Iterator<Item = Node<'a>> + 's
where
    'a: 's,
{
    region.find_all(block, max_blocks)
}
