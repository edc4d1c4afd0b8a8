use crate::xts::cipher::Block;

// used on both sides of the cipher call in XEX
#[inline(always)]
pub(crate) fn xor_in_place(state: &mut Block, other: &[u8]) {
    for (s, o) in state.iter_mut().zip(other) {
        *s ^= o;
    }
}
