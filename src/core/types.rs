/// Identifier of a car part; a machine shares the id of the part it makes
pub type PartId = u32;

/// Identifier of a customer order
pub type OrderId = u32;

/// Identifier of a catalog book
pub type BookId = u32;

/// Identifier of a library user
pub type UserId = u32;

/// Position in simulated time, both fields counted from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SimTime {
    pub day: u32,
    pub minute: u32,
}

impl SimTime {
    pub fn new(day: u32, minute: u32) -> Self {
        Self { day, minute }
    }
}

impl std::fmt::Display for SimTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "day {} minute {}", self.day, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sim_time_ordering() {
        assert!(SimTime::new(1, 59) < SimTime::new(2, 1));
        assert_eq!(SimTime::new(3, 4).to_string(), "day 3 minute 4");
    }
}
