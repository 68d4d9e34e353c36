use crate::WORD_BIT_LEN;

/// LSB-first iterator over the bits of a `u32`, produced by [`iter_bits`].
pub struct BitIterator {
    word_mask: u32,
    word: u32,
}

#[must_use]
pub fn iter_bits(word: u32) -> BitIterator {
    BitIterator { word_mask: 1, word }
}

impl Iterator for BitIterator {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.word_mask == 0 {
            None
        } else {
            let value = (self.word & self.word_mask) == self.word_mask;
            self.word_mask <<= 1;
            Some(value)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.len();
        (size, Some(size))
    }
}

impl ExactSizeIterator for BitIterator {
    fn len(&self) -> usize {
        WORD_BIT_LEN - self.word_mask.trailing_zeros() as usize
    }
}
