//! Reads machine definitions and customer orders from CSV
//!
//! Parts file: `id, name, weight, weight_error, period, chance_of_defective`.
//! Orders file: `id, customer_name, requested_parts` where requested parts
//! look like `(1 2)-(3 4)`: part 1 twice and part 3 four times.

use super::machine::PartMachine;
use super::order::Order;
use super::part::CarPart;
use crate::core::collections::{HashTableSC, Map};
use crate::core::csv_source::{CsvSource, Row};
use crate::core::errors::LoadError;
use crate::core::execution::SimulationConfig;
use crate::core::types::{OrderId, PartId};
use log::{info, warn};
use std::path::Path;

/// Build one machine per row of the parts file
pub fn load_machines(path: &Path, config: &SimulationConfig) -> Result<Vec<PartMachine>, LoadError> {
    let mut machines = Vec::new();
    CsvSource::open(path)?.for_each_row(|row| {
        machines.push(machine_from_row(&row, config)?);
        Ok(())
    })?;
    info!("Loaded {} machines from {}", machines.len(), path.display());
    Ok(machines)
}

fn machine_from_row(row: &Row<'_>, config: &SimulationConfig) -> Result<PartMachine, LoadError> {
    let id: PartId = row.parse(0, "id")?;
    let name = row.text(1, "name")?.to_string();
    let weight: f64 = row.parse(2, "weight")?;
    let weight_error: f64 = row.parse(3, "weight_error")?;
    let period: u32 = row.parse(4, "period")?;
    let chance_of_defective: u32 = row.parse(5, "chance_of_defective")?;

    if period == 0 {
        return Err(row.invalid("period", "0"));
    }
    if !weight.is_finite() {
        return Err(row.invalid("weight", &weight.to_string()));
    }
    if !weight_error.is_finite()
        || !(weight - weight_error).is_finite()
        || !(weight + weight_error).is_finite()
    {
        return Err(row.invalid("weight_error", &weight_error.to_string()));
    }

    Ok(PartMachine::new(
        id,
        CarPart::new(id, name, weight, false),
        period,
        weight_error,
        chance_of_defective,
        config.conveyor_belt_length,
        config.machine_seed(id),
    ))
}

/// Read every order; all start out pending
pub fn load_orders(path: &Path) -> Result<Vec<Order>, LoadError> {
    let mut orders = Vec::new();
    CsvSource::open(path)?.for_each_row(|row| {
        let id: OrderId = row.parse(0, "id")?;
        let customer = row.text(1, "customer_name")?;
        let requested_text = row.text(2, "requested_parts")?;
        let requested = parse_requested_parts(requested_text)
            .ok_or_else(|| row.invalid("requested_parts", requested_text))?;
        let order = Order::new(id, customer, requested)
            .map_err(|_| row.invalid("customer_name", customer))?;
        orders.push(order);
        Ok(())
    })?;
    info!("Loaded {} orders from {}", orders.len(), path.display());
    Ok(orders)
}

/// Parse `(id qty)-(id qty)...` into a part -> quantity table
///
/// A part listed twice keeps its last quantity.
pub fn parse_requested_parts(text: &str) -> Option<HashTableSC<PartId, u32>> {
    let mut requested = HashTableSC::new(2);
    for group in text.split('-') {
        let cleaned: String = group.chars().filter(|c| *c != '(' && *c != ')').collect();
        let mut fields = cleaned.split_whitespace();
        let part_id: PartId = fields.next()?.parse().ok()?;
        let quantity: u32 = fields.next()?.parse().ok()?;
        if fields.next().is_some() {
            return None;
        }
        if requested.put(part_id, quantity).is_some() {
            warn!("Part {} listed twice in '{}', keeping quantity {}", part_id, text, quantity);
        }
    }
    Some(requested)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requested_parts() {
        let table = parse_requested_parts("(1 2)-(3 4)").unwrap();
        assert_eq!(table.size(), 2);
        assert_eq!(table.get(&1), Some(&2));
        assert_eq!(table.get(&3), Some(&4));
    }

    #[test]
    fn test_parse_single_group_with_spaces() {
        let table = parse_requested_parts(" ( 5 10 ) ").unwrap();
        assert_eq!(table.get(&5), Some(&10));
    }

    #[test]
    fn test_parse_duplicate_keeps_last() {
        let table = parse_requested_parts("(2 1)-(2 6)").unwrap();
        assert_eq!(table.size(), 1);
        assert_eq!(table.get(&2), Some(&6));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_requested_parts("(1)").is_none());
        assert!(parse_requested_parts("(a 2)").is_none());
        assert!(parse_requested_parts("(1 2 3)").is_none());
        assert!(parse_requested_parts("").is_none());
    }
}
