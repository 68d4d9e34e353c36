/// Masks selecting bit-groups of width 1, 2, 4, 8 and 16; each condensing
/// step sums adjacent groups of the matching width.
const GROUP_MASKS: [u32; 5] = [0x5555_5555, 0x3333_3333, 0x0F0F_0F0F, 0x00FF_00FF, 0x0000_FFFF];

/// Hamming weight by clearing the lowest set bit until none remain.
///
/// Runs in time proportional to the number of set bits, so `0` takes no
/// iterations and `u32::MAX` takes 32.
#[inline]
#[must_use]
pub fn count_by_kernighan_brian(value: u32) -> u32 {
    let mut remaining = value;
    let mut count = 0;
    while remaining != 0 {
        remaining &= remaining - 1;
        count += 1;
    }
    count
}

/// Hamming weight by a fixed 5-step SWAR reduction.
///
/// Adjacent bit-groups of doubling width are summed in parallel within the
/// word, so the cost is five arithmetic steps regardless of the input.
#[inline]
#[must_use]
pub fn count_by_condensing(value: u32) -> u32 {
    // First step folded: a 2-bit group holding bits (a, b) is replaced by
    // a + b, computed as the group minus its top bit.
    let mut count = value - ((value >> 1) & GROUP_MASKS[0]);
    count = ((count >> 2) & GROUP_MASKS[1]) + (count & GROUP_MASKS[1]);
    count = ((count >> 4) + count) & GROUP_MASKS[2];
    count = ((count >> 8) + count) & GROUP_MASKS[3];
    count = ((count >> 16) + count) & GROUP_MASKS[4];
    count
}
