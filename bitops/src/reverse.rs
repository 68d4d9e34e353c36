/// Even/odd half-mask pairs for bit-groups of width 1, 2, 4, 8 and 16.
const HALF_MASKS: [(u32, u32); 5] = [
    (0x5555_5555, 0xAAAA_AAAA),
    (0x3333_3333, 0xCCCC_CCCC),
    (0x0F0F_0F0F, 0xF0F0_F0F0),
    (0x00FF_00FF, 0xFF00_FF00),
    (0x0000_FFFF, 0xFFFF_0000),
];

/// Reverses the bit order of `value`: bit `i` moves to bit `31 - i`.
///
/// A 5-step butterfly exchange; each step swaps adjacent bit-groups of
/// doubling width, so the cost is constant regardless of the input.
#[inline]
#[must_use]
pub fn reverse_bits(value: u32) -> u32 {
    let mut exchanged = value;
    let mut shift = 1;
    for (even_half, odd_half) in HALF_MASKS {
        exchanged = (exchanged & even_half) << shift | (exchanged & odd_half) >> shift;
        shift <<= 1;
    }
    exchanged
}
