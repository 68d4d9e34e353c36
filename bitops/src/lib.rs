pub mod iter;
pub mod popcount;
pub mod reverse;
pub mod table;

pub use iter::{iter_bits, BitIterator};
pub use popcount::{count_by_condensing, count_by_kernighan_brian};
pub use reverse::reverse_bits;
pub use table::CountTable;

/// Width of the word type every operation in this crate works on.
pub const WORD_BIT_LEN: usize = u32::BITS as usize;
