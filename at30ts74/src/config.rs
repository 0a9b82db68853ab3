use modular_bitfield::prelude::*;

/// One-shot conversion control (bit 7). Only meaningful while shut down.
#[derive(BitfieldSpecifier, Debug, PartialEq, Clone, Copy)]
pub enum OneShot {
    Disabled,
    Enabled,
}

/// Conversion resolution (bits 6:5). Higher resolutions take longer to convert.
#[derive(BitfieldSpecifier, Debug, PartialEq, Clone, Copy)]
pub enum Resolution {
    Bits9,
    Bits10,
    Bits11,
    Bits12,
}

/// Consecutive out-of-limit conversions before the ALERT pin asserts (bits 4:3).
#[derive(BitfieldSpecifier, Debug, PartialEq, Clone, Copy)]
pub enum FaultQueue {
    One,
    Two,
    Four,
    Six,
}

#[derive(BitfieldSpecifier, Debug, PartialEq, Clone, Copy)]
pub enum AlertPolarity {
    ActiveLow,
    ActiveHigh,
}

#[derive(BitfieldSpecifier, Debug, PartialEq, Clone, Copy)]
pub enum CompInt {
    Comparator,
    Interrupt,
}

#[derive(BitfieldSpecifier, Debug, PartialEq, Clone, Copy)]
pub enum Shutdown {
    Disable,
    Enable,
}

/** The AT30TS74 configuration register (address `0x01`).

All fields power up to zero: continuous 9-bit conversions, one-fault queue, active-low
comparator alert. [`configure`](crate::At30ts74::configure) writes this register with
[`Resolution::Bits12`] and everything else left at its power-up value, which encodes
as the raw byte `0x60`. */
#[bitfield]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ConfigReg {
    pub shutdown: Shutdown,
    pub comp_int: CompInt,
    pub alert_polarity: AlertPolarity,
    pub fault_queue: FaultQueue,
    pub resolution: Resolution,
    pub one_shot: OneShot,
}
