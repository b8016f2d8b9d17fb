//! # Status Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLD, SED and CLV each change exactly one flag.
//! There is no SEV; overflow is only ever set by ADC, SBC and BIT.

use crate::{MemoryBus, Status, CPU};

/// Sets or clears a single status flag.
pub(crate) fn execute_flag<M: MemoryBus>(cpu: &mut CPU<M>, flag: Status, value: bool) {
    cpu.status.set(flag, value);
}
