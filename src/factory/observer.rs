use super::machine::PartMachine;
use crate::core::types::SimTime;
use log::{debug, trace};

/// Observer trait for factory simulation progress
pub trait FactoryObserver {
    /// Called after every machine has been ticked for one minute
    fn on_minute_complete(&mut self, time: SimTime, machines: &[PartMachine]);

    /// Called after the day's output has been sorted into inventory
    fn on_day_complete(&mut self, day: u32, stored: usize, defective: usize);
}

/// Logs a one-line summary per simulated day
#[derive(Debug, Default)]
pub struct LogObserver;

impl FactoryObserver for LogObserver {
    fn on_minute_complete(&mut self, time: SimTime, machines: &[PartMachine]) {
        let riding: usize = machines.iter().map(|m| m.remaining_conveyor_belt().len()).sum();
        trace!("{}: {} parts on the belts", time, riding);
    }

    fn on_day_complete(&mut self, day: u32, stored: usize, defective: usize) {
        debug!("Day {}: {} parts stored, {} defective", day, stored, defective);
    }
}

/// Collects conveyor belt diagrams for every machine at the end of each minute
#[derive(Debug, Default)]
pub struct BeltRecorder {
    frames: Vec<(SimTime, Vec<String>)>,
}

impl BeltRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded frames in simulation order
    pub fn frames(&self) -> &[(SimTime, Vec<String>)] {
        &self.frames
    }
}

impl FactoryObserver for BeltRecorder {
    fn on_minute_complete(&mut self, time: SimTime, machines: &[PartMachine]) {
        let diagrams = machines.iter().map(PartMachine::conveyor_belt_diagram).collect();
        self.frames.push((time, diagrams));
    }

    fn on_day_complete(&mut self, day: u32, _stored: usize, _defective: usize) {
        debug!("Recorded {} belt frames through day {}", self.frames.len(), day);
    }
}
