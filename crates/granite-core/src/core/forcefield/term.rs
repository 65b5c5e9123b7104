use std::ops::{Add, AddAssign};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PairEnergy {
    pub attractive: f64,
    pub repulsive: f64,
    pub solvation: f64,
}

impl PairEnergy {
    pub fn new(attractive: f64, repulsive: f64, solvation: f64) -> Self {
        Self {
            attractive,
            repulsive,
            solvation,
        }
    }

    #[inline]
    pub fn total(&self) -> f64 {
        self.attractive + self.repulsive + self.solvation
    }
}

impl Add for PairEnergy {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            attractive: self.attractive + rhs.attractive,
            repulsive: self.repulsive + rhs.repulsive,
            solvation: self.solvation + rhs.solvation,
        }
    }
}

impl AddAssign for PairEnergy {
    fn add_assign(&mut self, rhs: Self) {
        self.attractive += rhs.attractive;
        self.repulsive += rhs.repulsive;
        self.solvation += rhs.solvation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_pair_energy_with_specified_values() {
        let term = PairEnergy::new(1.0, 2.0, 3.0);
        assert_eq!(term.attractive, 1.0);
        assert_eq!(term.repulsive, 2.0);
        assert_eq!(term.solvation, 3.0);
    }

    #[test]
    fn total_returns_sum_of_all_terms() {
        let term = PairEnergy::new(1.5, -2.0, 0.5);
        assert_eq!(term.total(), 0.0);
    }

    #[test]
    fn add_sums_each_field_correctly() {
        let a = PairEnergy::new(1.0, 2.0, 3.0);
        let b = PairEnergy::new(4.0, 5.0, 6.0);
        let result = a + b;
        assert_eq!(result, PairEnergy::new(5.0, 7.0, 9.0));
    }

    #[test]
    fn add_assign_accumulates_each_field_correctly() {
        let mut a = PairEnergy::new(1.0, 2.0, 3.0);
        let b = PairEnergy::new(4.0, 5.0, 6.0);
        a += b;
        assert_eq!(a, PairEnergy::new(5.0, 7.0, 9.0));
    }

    #[test]
    fn default_initializes_all_fields_to_zero() {
        let term = PairEnergy::default();
        assert_eq!(term.attractive, 0.0);
        assert_eq!(term.repulsive, 0.0);
        assert_eq!(term.solvation, 0.0);
    }

    #[test]
    fn add_with_negative_values() {
        let a = PairEnergy::new(-1.0, 2.0, -3.0);
        let b = PairEnergy::new(4.0, -5.0, 6.0);
        let result = a + b;
        assert_eq!(result, PairEnergy::new(3.0, -3.0, 3.0));
    }
}
