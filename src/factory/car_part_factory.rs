use super::loader::{load_machines, load_orders};
use super::machine::PartMachine;
use super::observer::FactoryObserver;
use super::order::Order;
use super::part::CarPart;
use crate::core::collections::{HashTableSC, LinkedStack, Map, Stack};
use crate::core::errors::LoadError;
use crate::core::execution::{ConcurrencyMode, SimulationConfig};
use crate::core::types::{PartId, SimTime};
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use std::path::Path;

/// Car part factory: machines, their output staging, inventory and orders
pub struct CarPartFactory {
    machines: Vec<PartMachine>,
    orders: Vec<Order>,
    part_catalog: HashTableSC<PartId, CarPart>,
    inventory: HashTableSC<PartId, Vec<CarPart>>,
    production_bin: LinkedStack<CarPart>,
    defectives: HashTableSC<PartId, u32>,
    config: SimulationConfig,
    thread_pool: Option<rayon::ThreadPool>,
    observers: Vec<Box<dyn FactoryObserver>>,
}

impl CarPartFactory {
    /// Load machines and orders from CSV and set up catalog and inventory
    pub fn from_files(
        orders_path: impl AsRef<Path>,
        parts_path: impl AsRef<Path>,
        config: SimulationConfig,
    ) -> Result<Self, LoadError> {
        let machines = load_machines(parts_path.as_ref(), &config)?;
        let orders = load_orders(orders_path.as_ref())?;
        Ok(Self::new(machines, orders, config))
    }

    /// Build a factory from machines and orders already in memory
    pub fn new(machines: Vec<PartMachine>, orders: Vec<Order>, config: SimulationConfig) -> Self {
        let thread_pool = match (config.concurrency_mode, config.thread_pool_size) {
            (ConcurrencyMode::Rayon, Some(size)) => rayon::ThreadPoolBuilder::new()
                .num_threads(size)
                .build()
                .map_err(|e| warn!("Falling back to the global rayon pool: {}", e))
                .ok(),
            _ => None,
        };

        let mut factory = Self {
            machines,
            orders,
            part_catalog: HashTableSC::new(2),
            inventory: HashTableSC::new(2),
            production_bin: LinkedStack::new(),
            defectives: HashTableSC::new(2),
            config,
            thread_pool,
            observers: Vec::new(),
        };
        factory.setup_catalog();
        factory.setup_inventory();
        factory
    }

    /// Register every machine's part in the catalog and zero its defect counter
    fn setup_catalog(&mut self) {
        for machine in &self.machines {
            let part = machine.part();
            if self.part_catalog.put(part.id, part.clone()).is_some() {
                warn!("Duplicate machine for part {}, keeping the last definition", part.id);
            }
            self.defectives.put(part.id, 0);
        }
    }

    /// Give every part an empty inventory list
    fn setup_inventory(&mut self) {
        for machine in &self.machines {
            self.inventory.put(machine.part().id, Vec::new());
        }
    }

    /// Add an observer to the simulation
    pub fn add_observer(&mut self, observer: Box<dyn FactoryObserver>) {
        self.observers.push(observer);
    }

    pub fn machines(&self) -> &[PartMachine] {
        &self.machines
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn part_catalog(&self) -> &HashTableSC<PartId, CarPart> {
        &self.part_catalog
    }

    pub fn inventory(&self) -> &HashTableSC<PartId, Vec<CarPart>> {
        &self.inventory
    }

    pub fn production_bin(&self) -> &LinkedStack<CarPart> {
        &self.production_bin
    }

    /// Mutable access to the staging stack, e.g. to stage parts by hand
    pub fn production_bin_mut(&mut self) -> &mut LinkedStack<CarPart> {
        &mut self.production_bin
    }

    pub fn defectives(&self) -> &HashTableSC<PartId, u32> {
        &self.defectives
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of good parts in stock for `part_id`
    pub fn inventory_count(&self, part_id: PartId) -> usize {
        self.inventory.get(&part_id).map(Vec::len).unwrap_or(0)
    }

    /// Number of defective parts discarded for `part_id`
    pub fn defective_count(&self, part_id: PartId) -> u32 {
        self.defectives.get(&part_id).copied().unwrap_or(0)
    }

    /// Empty the production bin, counting defects and stocking good parts
    ///
    /// Returns `(stored, defective)` for this pass.
    pub fn store_in_inventory(&mut self) -> (usize, usize) {
        let mut stored = 0;
        let mut defective = 0;

        while let Some(part) = self.production_bin.pop() {
            if part.defective {
                match self.defectives.get_mut(&part.id) {
                    Some(count) => *count += 1,
                    None => {
                        self.defectives.put(part.id, 1);
                    }
                }
                defective += 1;
            } else {
                match self.inventory.get_mut(&part.id) {
                    Some(stock) => stock.push(part),
                    None => {
                        self.inventory.put(part.id, vec![part]);
                    }
                }
                stored += 1;
            }
        }

        (stored, defective)
    }

    /// Tick every machine once, returning emitted parts in machine order
    fn tick_machines(&mut self) -> Vec<Option<CarPart>> {
        match self.config.concurrency_mode {
            ConcurrencyMode::Sequential => self
                .machines
                .iter_mut()
                .map(PartMachine::produce_car_part)
                .collect(),
            ConcurrencyMode::Rayon => {
                let machines = &mut self.machines;
                match &self.thread_pool {
                    Some(pool) => pool.install(|| {
                        machines
                            .par_iter_mut()
                            .map(PartMachine::produce_car_part)
                            .collect()
                    }),
                    None => machines
                        .par_iter_mut()
                        .map(PartMachine::produce_car_part)
                        .collect(),
                }
            }
        }
    }

    /// Move whatever is still riding each belt into the bin and clear the belts
    fn drain_conveyor_belts(&mut self) {
        for machine in &mut self.machines {
            for part in machine.remaining_conveyor_belt() {
                self.production_bin.push(part);
            }
            machine.reset_conveyor_belt();
        }
    }

    /// Run the factory for `days` days of `minutes` minutes, then process orders
    pub fn run_factory(&mut self, days: u32, minutes: u32) {
        info!(
            "Running factory: {} machines, {} days x {} minutes",
            self.machines.len(),
            days,
            minutes
        );

        for day in 1..=days {
            for minute in 1..=minutes {
                for part in self.tick_machines().into_iter().flatten() {
                    trace!("Day {} minute {}: {} entered the production bin", day, minute, part);
                    self.production_bin.push(part);
                }

                let time = SimTime::new(day, minute);
                for observer in &mut self.observers {
                    observer.on_minute_complete(time, &self.machines);
                }
            }

            self.drain_conveyor_belts();
            let (stored, defective) = self.store_in_inventory();
            debug!("End of day {}: stored {}, defective {}", day, stored, defective);

            for observer in &mut self.observers {
                observer.on_day_complete(day, stored, defective);
            }
        }

        self.process_orders();
    }

    /// Whether current stock covers every line of `order`
    fn can_fulfill(&self, order: &Order) -> bool {
        order.requested_parts().iter().all(|(part_id, &quantity)| {
            match self.inventory.get(part_id) {
                Some(stock) => quantity as usize <= stock.len(),
                None => {
                    warn!("Order {} requests unknown part {}", order.id(), part_id);
                    false
                }
            }
        })
    }

    /// Fulfill every pending order that current stock can cover, in order
    ///
    /// Returns the number of orders fulfilled by this pass.
    pub fn process_orders(&mut self) -> usize {
        let mut fulfilled = 0;

        for index in 0..self.orders.len() {
            let order = &self.orders[index];
            if order.is_fulfilled() || !self.can_fulfill(order) {
                continue;
            }

            for (part_id, &quantity) in order.requested_parts().iter() {
                if let Some(stock) = self.inventory.get_mut(part_id) {
                    stock.drain(..quantity as usize);
                }
            }

            let order = &mut self.orders[index];
            order.set_fulfilled(true);
            debug!("Fulfilled order {} for {}", order.id(), order.customer_name());
            fulfilled += 1;
        }

        info!(
            "Processed orders: {} fulfilled this pass, {} pending",
            fulfilled,
            self.orders.iter().filter(|o| !o.is_fulfilled()).count()
        );
        fulfilled
    }

    /// Per-machine production summary followed by every order's status
    pub fn generate_report(&self) -> String {
        let mut report = String::from("\t\t\tREPORT\n\n");
        report.push_str("Parts Produced per Machine\n");
        for machine in &self.machines {
            let part_id = machine.part().id;
            report.push_str(&format!(
                "{}\t({} defective)\t({} in inventory)\n",
                machine,
                self.defective_count(part_id),
                self.inventory_count(part_id)
            ));
        }

        report.push_str("\nORDERS\n\n");
        for order in &self.orders {
            report.push_str(&format!("{}\n", order));
        }
        report
    }
}
