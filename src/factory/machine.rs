use super::part::CarPart;
use crate::core::collections::{ListQueue, Queue};
use crate::core::types::PartId;
use log::trace;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

/// Machine that stamps out one kind of car part on a fixed period
///
/// The timer is a rotating queue holding `period-1 .. 0`; a part is made on
/// every tick that reads 0. New parts ride a fixed-length conveyor belt and
/// only leave it from the front when the machine produces again.
#[derive(Debug, Clone)]
pub struct PartMachine {
    id: PartId,
    /// Template for produced parts
    part: CarPart,
    period: u32,
    weight_error: f64,
    /// Every n-th part (starting with the first) is defective; 0 disables defects
    chance_of_defective: u32,
    timer: ListQueue<u32>,
    conveyor_belt: ListQueue<Option<CarPart>>,
    belt_length: usize,
    total_parts_produced: u32,
    rng: StdRng,
}

impl PartMachine {
    /// Create a machine with an empty belt of `belt_length` slots
    ///
    /// A period of zero is treated as one (produce every minute).
    pub fn new(
        id: PartId,
        part: CarPart,
        period: u32,
        weight_error: f64,
        chance_of_defective: u32,
        belt_length: usize,
        seed: u64,
    ) -> Self {
        let period = period.max(1);
        let belt_length = belt_length.max(1);
        Self {
            id,
            part,
            period,
            weight_error: weight_error.abs(),
            chance_of_defective,
            timer: (0..period).rev().collect(),
            conveyor_belt: std::iter::repeat_with(|| None).take(belt_length).collect(),
            belt_length,
            total_parts_produced: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn id(&self) -> PartId {
        self.id
    }

    pub fn part(&self) -> &CarPart {
        &self.part
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn weight_error(&self) -> f64 {
        self.weight_error
    }

    pub fn chance_of_defective(&self) -> u32 {
        self.chance_of_defective
    }

    pub fn total_parts_produced(&self) -> u32 {
        self.total_parts_produced
    }

    pub fn timer(&self) -> &ListQueue<u32> {
        &self.timer
    }

    pub fn conveyor_belt(&self) -> &ListQueue<Option<CarPart>> {
        &self.conveyor_belt
    }

    /// Rotate the timer by one minute and return the value that was at the front
    pub fn tick_timer(&mut self) -> u32 {
        match self.timer.dequeue() {
            Some(time) => {
                self.timer.enqueue(time);
                time
            }
            // Unreachable in practice, the timer always holds `period` values
            None => 0,
        }
    }

    /// Advance one minute, returning the part pushed off the belt if any
    pub fn produce_car_part(&mut self) -> Option<CarPart> {
        let time = self.tick_timer();

        if time == 0 {
            let produced = self.make_part();
            self.conveyor_belt.enqueue(Some(produced));
            self.total_parts_produced += 1;
            self.conveyor_belt.dequeue().flatten()
        } else {
            self.conveyor_belt.enqueue(None);
            if let Some(Some(lost)) = self.conveyor_belt.dequeue() {
                trace!("Machine {}: {} fell off the belt on an idle tick", self.id, lost);
            }
            None
        }
    }

    fn make_part(&mut self) -> CarPart {
        let low = self.part.weight - self.weight_error;
        let high = self.part.weight + self.weight_error;
        let weight = if self.weight_error > 0.0 && low.is_finite() && high.is_finite() {
            Uniform::new_inclusive(low, high).sample(&mut self.rng)
        } else {
            self.part.weight
        };

        let defective = self.chance_of_defective != 0
            && self.total_parts_produced % self.chance_of_defective == 0;

        CarPart::new(self.part.id, self.part.name.clone(), weight, defective)
    }

    /// Parts currently on the belt, front to back; the belt is left untouched
    pub fn remaining_conveyor_belt(&self) -> Vec<CarPart> {
        self.conveyor_belt.iter().flatten().cloned().collect()
    }

    /// Empty every slot on the belt
    pub fn reset_conveyor_belt(&mut self) {
        for slot in self.conveyor_belt.iter_mut() {
            *slot = None;
        }
    }

    /// Number of belt slots
    pub fn belt_length(&self) -> usize {
        self.belt_length
    }

    /// Text picture of the belt: the machine on the left, the newest part
    /// nearest to it, `|P|` for a part and `_` for an empty slot
    pub fn conveyor_belt_diagram(&self) -> String {
        let belt: String = self
            .conveyor_belt
            .iter()
            .rev()
            .map(|slot| if slot.is_some() { "|P|" } else { "_" })
            .collect();
        format!("|Machine {}|{}", self.id, belt)
    }
}

impl std::fmt::Display for PartMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Machine {} Produced: {} {}",
            self.id, self.part.name, self.total_parts_produced
        )
    }
}
