//! Big-endian modular addition on seedlen-wide byte strings.

/// acc = (acc + addend) mod 2^(8 * acc.len()).
///
/// Both operands are big-endian unsigned integers. `addend` must not be
/// longer than `acc` and is right-aligned against it, zero-extended on the
/// left. Carry propagates from the low-order byte upward; the carry out of
/// the most significant byte is discarded.
pub(crate) fn add_be(acc: &mut [u8], addend: &[u8]) {
    debug_assert!(addend.len() <= acc.len());
    let shift = acc.len() - addend.len();
    let mut carry: u16 = 0;
    for i in (0..acc.len()).rev() {
        let a = if i >= shift { addend[i - shift] as u16 } else { 0 };
        let sum = acc[i] as u16 + a + carry;
        acc[i] = sum as u8;
        carry = sum >> 8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference addition through u128 for operand widths up to 16 bytes.
    fn add_reference(acc: &[u8], addend: &[u8]) -> Vec<u8> {
        let widen = |bytes: &[u8]| {
            bytes.iter().fold(0u128, |n, &b| (n << 8) | u128::from(b))
        };
        let bits = (acc.len() * 8) as u32;
        let mask = if bits == 128 { u128::MAX } else { (1 << bits) - 1 };
        let sum = widen(acc).wrapping_add(widen(addend)) & mask;
        (0..acc.len())
            .rev()
            .map(|i| (sum >> (8 * i)) as u8)
            .collect()
    }

    #[test]
    fn test_add_simple() {
        let mut acc = vec![0x00, 0x00, 0x00, 0x01];
        add_be(&mut acc, &[0x02]);
        assert_eq!(acc, [0x00, 0x00, 0x00, 0x03]);
    }

    #[test]
    fn test_add_carry_propagates() {
        let mut acc = vec![0x00, 0x00, 0xff, 0xff];
        add_be(&mut acc, &[0x01]);
        assert_eq!(acc, [0x00, 0x01, 0x00, 0x00]);
    }

    #[test]
    fn test_add_full_width_wrap() {
        // Overflow past the most significant byte is discarded.
        let mut acc = vec![0xff, 0xff, 0xff, 0xff];
        add_be(&mut acc, &[0x01]);
        assert_eq!(acc, [0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_add_equal_width_operands() {
        let mut acc = vec![0x12, 0x34, 0x56, 0x78];
        add_be(&mut acc, &[0xff, 0xff, 0xff, 0xff]);
        assert_eq!(acc, [0x12, 0x34, 0x56, 0x77]);
    }

    #[test]
    fn test_add_right_alignment() {
        // A short addend lands in the low-order tail.
        let mut acc = vec![0x10, 0x20, 0x30, 0x40, 0x50];
        add_be(&mut acc, &[0x01, 0x02]);
        assert_eq!(acc, [0x10, 0x20, 0x30, 0x41, 0x52]);
    }

    #[test]
    fn test_add_matches_wide_reference() {
        let patterns: [(&[u8], &[u8]); 5] = [
            (&[0xff; 8], &[0xff; 8]),
            (&[0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, 0x67, 0x89], &[0xff, 0xff]),
            (&[0x00; 12], &[0x01]),
            (&[0x7f, 0xff, 0xff, 0xff], &[0x80, 0x00, 0x00, 0x01]),
            (&[0xde, 0xad, 0xbe, 0xef, 0xde, 0xad, 0xbe, 0xef], &[0x99]),
        ];
        for (acc_init, addend) in patterns {
            let mut acc = acc_init.to_vec();
            add_be(&mut acc, addend);
            assert_eq!(acc, add_reference(acc_init, addend), "acc {acc_init:02x?} + {addend:02x?}");
        }
    }

    #[test]
    fn test_add_counter_serialization() {
        // A u32 counter is added as its 4-byte big-endian form.
        let mut acc = vec![0u8; 8];
        add_be(&mut acc, &0x01020304u32.to_be_bytes());
        assert_eq!(acc, [0, 0, 0, 0, 0x01, 0x02, 0x03, 0x04]);
    }
}
