use serde::{Deserialize, Serialize};

/// A single numbered parking slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParkingSpace {
    pub number: u32,
    pub is_free: bool,
}

impl ParkingSpace {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            is_free: true,
        }
    }
}

/// Fixed pool of spaces numbered from 1. Spaces are never added or removed after creation.
#[derive(Debug, Clone)]
pub struct SpaceInventory {
    spaces: Vec<ParkingSpace>,
}

impl SpaceInventory {
    pub fn new(capacity: u32) -> Self {
        Self {
            spaces: (1..=capacity).map(ParkingSpace::new).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.spaces.len()
    }

    pub fn get(&self, number: u32) -> Option<&ParkingSpace> {
        self.index_of(number).map(|idx| &self.spaces[idx])
    }

    /// First free space in number order, without claiming it
    pub fn find_free(&self) -> Option<u32> {
        self.spaces.iter().find(|s| s.is_free).map(|s| s.number)
    }

    /// Claim the first free space in number order
    pub fn allocate(&mut self) -> Result<u32, SpaceError> {
        let capacity = self.spaces.len();
        let space = self
            .spaces
            .iter_mut()
            .find(|s| s.is_free)
            .ok_or(SpaceError::Exhausted { capacity })?;

        space.is_free = false;
        Ok(space.number)
    }

    /// Return a claimed space to the pool
    pub fn release(&mut self, number: u32) -> Result<(), SpaceError> {
        let idx = self.index_of(number).ok_or(SpaceError::NotFound(number))?;
        let space = &mut self.spaces[idx];

        if space.is_free {
            return Err(SpaceError::AlreadyFree(number));
        }

        space.is_free = true;
        Ok(())
    }

    pub fn available(&self) -> usize {
        self.spaces.iter().filter(|s| s.is_free).count()
    }

    pub fn occupied(&self) -> usize {
        self.capacity() - self.available()
    }

    /// Share of spaces in use, 0.0 for an empty pool
    pub fn utilization(&self) -> f64 {
        if self.spaces.is_empty() {
            0.0
        } else {
            self.occupied() as f64 / self.capacity() as f64
        }
    }

    fn index_of(&self, number: u32) -> Option<usize> {
        // Spaces are numbered contiguously from 1
        let idx = (number as usize).checked_sub(1)?;
        (idx < self.spaces.len()).then_some(idx)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SpaceError {
    #[error("No free space: all {capacity} spaces are occupied")]
    Exhausted { capacity: usize },

    #[error("Space not found: {0}")]
    NotFound(u32),

    #[error("Space already free: {0}")]
    AlreadyFree(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_lifecycle() {
        let mut inventory = SpaceInventory::new(3);
        assert_eq!(inventory.capacity(), 3);
        assert_eq!(inventory.available(), 3);

        // Allocation scans in number order
        assert_eq!(inventory.allocate().unwrap(), 1);
        assert_eq!(inventory.allocate().unwrap(), 2);
        assert_eq!(inventory.available(), 1);
        assert!(!inventory.get(2).unwrap().is_free);

        // Freed spaces are reused first
        inventory.release(1).unwrap();
        assert_eq!(inventory.find_free(), Some(1));
        assert_eq!(inventory.allocate().unwrap(), 1);

        assert!((inventory.utilization() - 2.0 / 3.0).abs() < 0.001);
    }

    #[test]
    fn test_exhausted() {
        let mut inventory = SpaceInventory::new(1);
        inventory.allocate().unwrap();

        assert_eq!(inventory.allocate(), Err(SpaceError::Exhausted { capacity: 1 }));
        assert_eq!(inventory.available(), 0);
        assert_eq!(inventory.occupied(), 1);
    }

    #[test]
    fn test_release_errors() {
        let mut inventory = SpaceInventory::new(2);

        assert_eq!(inventory.release(0), Err(SpaceError::NotFound(0)));
        assert_eq!(inventory.release(3), Err(SpaceError::NotFound(3)));
        assert_eq!(inventory.release(1), Err(SpaceError::AlreadyFree(1)));
    }

    #[test]
    fn test_empty_pool() {
        let mut inventory = SpaceInventory::new(0);
        assert_eq!(inventory.utilization(), 0.0);
        assert!(inventory.allocate().is_err());
    }
}
