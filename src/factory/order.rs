use crate::core::collections::{HashTableSC, Map};
use crate::core::types::{OrderId, PartId};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum OrderError {
    #[error("customer name cannot be empty")]
    EmptyCustomerName,
}

/// A customer request for quantities of specific parts
///
/// Fulfilled all at once or not at all.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    /// part id -> quantity
    requested_parts: HashTableSC<PartId, u32>,
    fulfilled: bool,
}

impl Order {
    pub fn new(
        id: OrderId,
        customer_name: impl Into<String>,
        requested_parts: HashTableSC<PartId, u32>,
    ) -> Result<Self, OrderError> {
        let customer_name = customer_name.into();
        if customer_name.trim().is_empty() {
            return Err(OrderError::EmptyCustomerName);
        }
        Ok(Self {
            id,
            customer_name,
            requested_parts,
            fulfilled: false,
        })
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) -> Result<(), OrderError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(OrderError::EmptyCustomerName);
        }
        self.customer_name = name;
        Ok(())
    }

    pub fn requested_parts(&self) -> &HashTableSC<PartId, u32> {
        &self.requested_parts
    }

    /// Quantity requested for `part_id`, 0 if the order doesn't mention it
    pub fn quantity_of(&self, part_id: PartId) -> u32 {
        self.requested_parts.get(&part_id).copied().unwrap_or(0)
    }

    pub fn is_fulfilled(&self) -> bool {
        self.fulfilled
    }

    pub fn set_fulfilled(&mut self, fulfilled: bool) {
        self.fulfilled = fulfilled;
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.id,
            self.customer_name,
            self.requested_parts.size(),
            if self.fulfilled { "FULFILLED" } else { "PENDING" }
        )
    }
}
