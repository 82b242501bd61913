//! Group 2000: system instructions

use super::EventWriter;
use crate::types::Arg;

impl EventWriter {
    /// 2000[00] in slot 0. The common case; see
    /// [`initialize_event_with_slot`](Self::initialize_event_with_slot).
    pub fn initialize_event(&mut self, event_id: u32, event_args: &[u32]) {
        self.initialize_event_with_slot(0, event_id, event_args);
    }

    /// 2000[00]: initialize `event_id` in `event_slot_number` (used to
    /// distinguish copies of the same event) with a variable number of
    /// initialization arguments depending on the event.
    pub fn initialize_event_with_slot(
        &mut self,
        event_slot_number: i32,
        event_id: u32,
        event_args: &[u32],
    ) {
        let mut args = vec![Arg::I32(event_slot_number), Arg::U32(event_id)];
        if event_args.is_empty() {
            args.push(Arg::U32(0));
        } else {
            args.extend(event_args.iter().map(|&a| Arg::U32(a)));
        }
        self.raw(2000, 0, &args);
    }

    /// 2000[02]
    pub fn set_network_sync(&mut self, state: bool) {
        self.raw(2000, 2, &[state.into()]);
    }

    pub fn enable_network_sync(&mut self) {
        self.set_network_sync(true);
    }

    pub fn disable_network_sync(&mut self) {
        self.set_network_sync(false);
    }

    /// 2000[04]
    pub fn issue_prefetch_request(&mut self, request_id: u32) {
        self.raw(2000, 4, &[request_id.into()]);
    }

    /// 2000[05]
    pub fn save_request(&mut self) {
        self.raw(2000, 5, &[Arg::U8(0)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RestartType;

    #[test]
    fn initialize_event_defaults_missing_args_to_a_single_zero() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.initialize_event(11810001, &[]);
        assert_eq!(w.lines()[1], " 2000[00] (0, 11810001, 0)");
    }

    #[test]
    fn initialize_event_forwards_init_args() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.initialize_event_with_slot(2, 11810001, &[50, 60]);
        assert_eq!(w.lines()[1], " 2000[00] (2, 11810001, 50, 60)");
    }

    #[test]
    fn network_sync_wrappers_fix_the_state_bit() {
        let mut w = EventWriter::new(0, RestartType::RunOnce);
        w.enable_network_sync();
        w.disable_network_sync();
        assert_eq!(w.lines()[1], " 2000[02] (1)");
        assert_eq!(w.lines()[2], " 2000[02] (0)");
    }
}
