//! Keccak-f\[1600\] permutation.
//!
//! Twenty-four rounds of theta, rho, pi, chi and iota over a 5x5 array of
//! 64-bit lanes, lane `(x, y)` stored at index `x + 5 * y`. Control flow and
//! memory access depend only on lane positions, never on lane values.

use crate::bytes::rotl64;

/// Number of 64-bit lanes in the state.
pub const STATE_LANES: usize = 25;

/// Number of rounds of Keccak-f\[1600\].
pub const ROUNDS: usize = 24;

/// Iota round constants.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rho rotation offsets, in the order lanes are visited by [`PI_LANES`].
pub const RHO_OFFSETS: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Pi lane walk starting from lane 1: each entry is the destination of the
/// previously visited lane.
pub const PI_LANES: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Apply Keccak-f\[1600\] to `state` in place.
pub fn keccak_f1600(state: &mut [u64; STATE_LANES]) {
    for rc in ROUND_CONSTANTS {
        round(state, rc);
    }
}

#[inline(always)]
fn round(a: &mut [u64; STATE_LANES], rc: u64) {
    // Theta
    let c: [u64; 5] = core::array::from_fn(|x| a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20]);
    let d: [u64; 5] = core::array::from_fn(|x| c[(x + 4) % 5] ^ rotl64(c[(x + 1) % 5], 1));
    for (i, lane) in a.iter_mut().enumerate() {
        *lane ^= d[i % 5];
    }

    // Rho and pi
    let mut last = a[1];
    for (&dest, &offset) in PI_LANES.iter().zip(RHO_OFFSETS.iter()) {
        let next = a[dest];
        a[dest] = rotl64(last, offset);
        last = next;
    }

    // Chi
    for row in a.chunks_exact_mut(5) {
        let r = [row[0], row[1], row[2], row[3], row[4]];
        for (x, lane) in row.iter_mut().enumerate() {
            *lane = r[x] ^ (!r[(x + 1) % 5] & r[(x + 2) % 5]);
        }
    }

    // Iota
    a[0] ^= rc;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_constant_table() {
        assert_eq!(ROUND_CONSTANTS[0], 1);
        assert_eq!(ROUND_CONSTANTS[23], 0x8000000080008008);
    }

    #[test]
    fn test_pi_walk_visits_every_lane_but_origin() {
        let mut seen = [false; STATE_LANES];
        for &lane in PI_LANES.iter() {
            assert!(!seen[lane], "lane {} visited twice", lane);
            seen[lane] = true;
        }
        assert!(!seen[0]);
        assert_eq!(seen.iter().filter(|&&s| s).count(), 24);
    }

    #[test]
    fn test_rho_offsets_are_triangular_numbers_mod_64() {
        for (t, &offset) in RHO_OFFSETS.iter().enumerate() {
            let t = t as u32;
            assert_eq!(offset, ((t + 1) * (t + 2) / 2) % 64);
        }
    }

    #[test]
    fn test_zero_state_known_answer() {
        let mut state = [0u64; STATE_LANES];
        keccak_f1600(&mut state);
        let expected: [u64; STATE_LANES] = [
            0xf1258f7940e1dde7,
            0x84d5ccf933c0478a,
            0xd598261ea65aa9ee,
            0xbd1547306f80494d,
            0x8b284e056253d057,
            0xff97a42d7f8e6fd4,
            0x90fee5a0a44647c4,
            0x8c5bda0cd6192e76,
            0xad30a6f71b19059c,
            0x30935ab7d08ffc64,
            0xeb5aa93f2317d635,
            0xa9a6e6260d712103,
            0x81a57c16dbcf555f,
            0x43b831cd0347c826,
            0x01f22f1a11a5569f,
            0x05e5635a21d9ae61,
            0x64befef28cc970f2,
            0x613670957bc46611,
            0xb87c5a554fd00ecb,
            0x8c3ee88a1ccf32c8,
            0x940c7922ae3a2614,
            0x1841f924a2c509e4,
            0x16f53526e70465c2,
            0x75f644e97f30a13b,
            0xeaf1ff7b5ceca249,
        ];
        assert_eq!(state, expected);

        keccak_f1600(&mut state);
        assert_eq!(state[0], 0x2d5c954df96ecb3c);
        assert_eq!(state[24], 0x20d06cd26a8fbf5c);
    }

    #[test]
    fn test_permutation_is_deterministic() {
        let mut a = [0u64; STATE_LANES];
        let mut b = [0u64; STATE_LANES];
        for (i, (x, y)) in a.iter_mut().zip(b.iter_mut()).enumerate() {
            *x = (i as u64).wrapping_mul(0x9E3779B97F4A7C15);
            *y = *x;
        }
        keccak_f1600(&mut a);
        keccak_f1600(&mut b);
        assert_eq!(a, b);
    }
}
