//! The simulation state owned by one [`Sim`][crate::Sim].

use pt_agent::AgentRegistry;
use pt_core::Tick;
use pt_ledger::PrintLedger;

/// Everything the animation remembers between callbacks.
///
/// The two collections are independent; they only meet inside a frame tick,
/// where dogs write prints into the ledger.
pub struct TrailState {
    /// Dogs currently walking.
    pub agents: AgentRegistry,

    /// Prints currently on screen, oldest first.
    pub ledger: PrintLedger,

    /// Frames processed so far.
    pub tick: Tick,
}

impl TrailState {
    pub fn new(ledger_capacity: usize) -> Self {
        Self {
            agents: AgentRegistry::new(),
            ledger: PrintLedger::new(ledger_capacity),
            tick:   Tick::ZERO,
        }
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn print_count(&self) -> usize {
        self.ledger.len()
    }
}
