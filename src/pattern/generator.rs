use crate::address::Ipv4Address;

use super::octet_set::OctetSet;

/// Odometer-style enumeration of every address a pattern accepts.
///
/// The cursor starts on the first member of each octet position, so the
/// first yielded address is already a match. Advancing moves the least
/// significant position to its next member; wrapping past the last
/// member resets that position to its floor and carries into the next
/// more significant one. A carry out of position 0 exhausts the
/// iterator, which bounds the sequence by the product of the four
/// member counts.
#[derive(Debug)]
pub struct Addresses<'a> {
    octets: &'a [OctetSet; 4],
    cursor: [u8; 4],
    floor: [u8; 4],
    exhausted: bool,
}

impl<'a> Addresses<'a> {
    pub(super) fn new(octets: &'a [OctetSet; 4]) -> Self {
        let mut floor = [0u8; 4];
        let mut exhausted = false;
        for (slot, set) in floor.iter_mut().zip(octets.iter()) {
            match set.first() {
                Some(value) => *slot = value,
                // one empty position empties the whole product
                None => {
                    exhausted = true;
                    break;
                }
            }
        }

        Self {
            octets,
            cursor: floor,
            floor,
            exhausted,
        }
    }

    fn advance(&mut self) {
        for position in (0..4).rev() {
            match self.octets[position].next_after(self.cursor[position]) {
                Some(value) => {
                    self.cursor[position] = value;
                    return;
                }
                None => {
                    self.cursor[position] = self.floor[position];
                }
            }
        }
        self.exhausted = true;
    }
}

impl Iterator for Addresses<'_> {
    type Item = Ipv4Address;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let address = Ipv4Address::new(self.cursor);
        self.advance();
        Some(address)
    }
}
