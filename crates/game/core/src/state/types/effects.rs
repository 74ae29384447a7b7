use bitflags::bitflags;

bitflags! {
    /// Status effects currently active on a game object.
    ///
    /// The runner packs these as an integer bitmask on player attribute
    /// lists. Bits outside the five defined effects are dropped on decode,
    /// so a set never carries unknown flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Effects: u8 {
        const AFTERBURNER    = 1 << 0;
        const ASTEROID_FIELD = 1 << 1;
        const GAS_CLOUD      = 1 << 2;
        const SUPERFOOD      = 1 << 3;
        const SHIELD         = 1 << 4;
    }
}

impl Effects {
    /// Decodes the wire bitmask, discarding bits beyond the defined set.
    pub fn from_mask(mask: i32) -> Self {
        Self::from_bits_truncate(mask as u8)
    }
}
