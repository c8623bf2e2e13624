use super::ErrorKind;

/// One past the highest 6502 address.
const ADDRESS_SPACE_END: usize = 0x1_0000;

/// Address where the next emitted byte is placed.
///
/// The counter may reach `$10000` right after a byte was emitted at `$FFFF`, but nothing can be
/// placed or labelled there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationCounter(u32);

impl LocationCounter {
    pub fn new(start_address: u16) -> Self {
        Self(start_address as u32)
    }

    pub fn address(&self) -> u32 {
        self.0
    }

    /// Address of a label defined at the current location.
    pub fn label_address(&self) -> Result<u16, ErrorKind> {
        u16::try_from(self.0).map_err(|_| ErrorKind::AddressOverflow(self.0 as i64))
    }

    /// Jump to an address, used by `.ORG`.
    pub fn set(&mut self, address: u16) {
        self.0 = address as u32;
    }

    /// Move past `size` emitted bytes.
    pub fn advance(&mut self, size: usize) -> Result<(), ErrorKind> {
        let next = self.0 as usize + size;
        if next > ADDRESS_SPACE_END {
            return Err(ErrorKind::AddressOverflow(next as i64));
        }

        self.0 = next as u32;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_advance() {
        let mut lc = LocationCounter::new(0x1000);
        lc.advance(3).unwrap();
        assert_eq!(lc.address(), 0x1003);
        assert_eq!(lc.label_address(), Ok(0x1003));

        lc.set(0xfffe);
        lc.advance(2).unwrap();
        assert_eq!(lc.address(), 0x10000);
        assert_eq!(lc.label_address(), Err(ErrorKind::AddressOverflow(0x10000)));
        assert_eq!(lc.advance(1), Err(ErrorKind::AddressOverflow(0x10001)));
    }
}
