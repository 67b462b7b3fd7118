//! On-the-fly Khazad key schedule: computing round keys incrementally from a
//! 2-block rolling window instead of materializing a full [`Schedule`].
//!
//! [`Schedule`]: super::schedule::Schedule

use super::{matrix, round, sbox, NUM_ROUNDS};

/// Rolling key-schedule state: the two most recently produced round-key
/// blocks, addressed through swappable slot indices rather than physically
/// moved each round.
///
/// The underlying recurrence needs only $K_{r-2}$ and $K_{r-1}$ to produce
/// $K_r$, so the full 72-byte [`Schedule`](super::schedule::Schedule) is never
/// built; only these 16 bytes of state are live at any point. After each round
/// the block that is no longer needed (the old $K_{r-2}$) is overwritten with
/// $K_r$, and which of the two storage slots currently holds the "low"
/// (older) vs. "high" (newer) round key swaps every round. Swapping the two
/// `usize` indices rather than the 8-byte slot contents is what keeps this
/// branchless in terms of data movement; swapping the values instead would
/// silently produce a different, incorrect schedule, since the slot each
/// later round reads from is determined by which physical array position
/// the previous round actually wrote.
#[derive(Debug, Clone, Copy)]
pub struct OtfksState {
    slots: [[u8; 8]; 2],
    lo: usize,
    hi: usize,
}

impl OtfksState {
    fn new(key: [u8; 16]) -> Self {
        Self {
            slots: [key[0..8].try_into().unwrap(), key[8..16].try_into().unwrap()],
            lo: 0,
            hi: 1,
        }
    }

    fn advance(&mut self, start: usize, stop: usize) {
        let mut r = start;
        loop {
            let next = round::ks_round(self.slots[self.hi], r);
            round::xor_into(&mut self.slots[self.lo], &next);
            if r >= stop {
                break;
            }
            core::mem::swap(&mut self.lo, &mut self.hi);
            r += 1;
        }
    }

    /// Advance `key`'s seed blocks to $(K_0, K_1)$, the state
    /// [`encrypt`](Self::encrypt) expects.
    pub fn encrypt_start(key: [u8; 16]) -> Self {
        let mut state = Self::new(key);
        state.advance(0, 1);
        // `advance` swaps `lo`/`hi` once per round boundary crossed, an odd
        // number of times here, which leaves `lo` addressing K1 and `hi`
        // addressing K0. `encrypt`/`decrypt_from_encrypt_start` need `lo` to
        // address K0, so undo that last swap.
        core::mem::swap(&mut state.lo, &mut state.hi);
        state
    }

    /// Advance `key`'s seed blocks all the way to $(K_{\mathrm{NUM\\_ROUNDS}
    /// - 1}, K_{\mathrm{NUM\\_ROUNDS}})$, the state
    /// [`decrypt`](Self::decrypt) expects.
    pub fn decrypt_start(key: [u8; 16]) -> Self {
        let mut state = Self::new(key);
        state.advance(0, NUM_ROUNDS);
        state
    }

    /// Continue advancing a state already at $(K_0, K_1)$ up to
    /// $(K_{\mathrm{NUM\\_ROUNDS} - 1}, K_{\mathrm{NUM\\_ROUNDS}})$.
    ///
    /// Equal to [`decrypt_start`](Self::decrypt_start) run on the same key,
    /// just approached from the encryption side's stopping point instead of
    /// recomputing from the raw key.
    pub fn decrypt_from_encrypt_start(mut self) -> Self {
        self.advance(2, NUM_ROUNDS);
        self
    }

    /// Encrypt `block`, consuming `self` (built from
    /// [`encrypt_start`](Self::encrypt_start)).
    ///
    /// Round keys are generated one at a time into the slot vacated by the
    /// round just executed, rather than all up front. `self` must be
    /// re-derived for any subsequent encryption; there is no way to encrypt a
    /// second block from the same state, since the recurrence has consumed
    /// it.
    pub fn encrypt(mut self, block: [u8; 8]) -> [u8; 8] {
        let mut state = block;
        round::xor_into(&mut state, &self.slots[self.lo]);
        let mut r = 2;
        loop {
            sbox::apply_block(&mut state);
            state = matrix::mul(state);
            round::xor_into(&mut state, &self.slots[self.hi]);
            let next = round::ks_round(self.slots[self.hi], r);
            round::xor_into(&mut self.slots[self.lo], &next);
            if r >= NUM_ROUNDS {
                break;
            }
            core::mem::swap(&mut self.lo, &mut self.hi);
            r += 1;
        }
        sbox::apply_block(&mut state);
        round::xor_into(&mut state, &self.slots[self.lo]);
        state
    }

    /// Decrypt `block`, consuming `self` (built from
    /// [`decrypt_start`](Self::decrypt_start) or
    /// [`decrypt_from_encrypt_start`](Self::decrypt_from_encrypt_start)).
    pub fn decrypt(mut self, block: [u8; 8]) -> [u8; 8] {
        let mut state = block;
        round::xor_into(&mut state, &self.slots[self.lo]);
        sbox::apply_block(&mut state);
        let mut r = NUM_ROUNDS;
        loop {
            round::xor_into(&mut state, &self.slots[self.hi]);
            state = matrix::mul(state);
            sbox::apply_block(&mut state);
            let next = round::ks_round(self.slots[self.hi], r);
            round::xor_into(&mut self.slots[self.lo], &next);
            if r <= 2 {
                break;
            }
            core::mem::swap(&mut self.lo, &mut self.hi);
            r -= 1;
        }
        round::xor_into(&mut state, &self.slots[self.lo]);
        state
    }
}
