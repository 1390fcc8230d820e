use std::fmt;

use crate::{bench, util::NUM_CELLS};

/// Precomputed block index of every cell, row-major.
pub static LOOKUP: [u8; NUM_CELLS] = [
    0, 0, 0, 1, 1, 1, 2, 2, 2, //
    0, 0, 0, 1, 1, 1, 2, 2, 2, //
    0, 0, 0, 1, 1, 1, 2, 2, 2, //
    3, 3, 3, 4, 4, 4, 5, 5, 5, //
    3, 3, 3, 4, 4, 4, 5, 5, 5, //
    3, 3, 3, 4, 4, 4, 5, 5, 5, //
    6, 6, 6, 7, 7, 7, 8, 8, 8, //
    6, 6, 6, 7, 7, 7, 8, 8, 8, //
    6, 6, 6, 7, 7, 7, 8, 8, 8, //
];

/// `((cell / 9) / 3) * 3 + ((cell % 9) / 3)`, what every strategy must agree with.
#[inline]
pub fn canonical(cell: usize) -> usize {
    ((cell / 9) / 3) * 3 + ((cell % 9) / 3)
}

/// every `a % b` written out as `a - b * (a / b)`
#[inline]
pub fn heavy_division(cell: usize) -> usize {
    (cell - 27 * (cell / 27) - 9 * ((cell - 27 * (cell / 27)) / 9)) / 3 + 3 * (cell / 27)
}

/// column within the row, and the band of three rows (`cell / 27`)
#[inline]
pub fn light_division(cell: usize) -> usize {
    (cell - 9 * (cell / 9)) / 3 + 3 * (cell / 27)
}

/// panics if `cell >= 81`
#[inline]
pub fn lookup(cell: usize) -> usize {
    LOOKUP[cell] as usize
}

#[inline]
pub fn floor(cell: usize) -> usize {
    ((cell % 9) as f64 / 3.0).floor() as usize + 3 * (cell as f64 / 27.0).floor() as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    HeavyDivision,
    LightDivision,
    Lookup,
    Floor,
}

impl Strategy {
    /// run order of the benchmark
    pub const ALL: [Strategy; 4] = [
        Strategy::HeavyDivision,
        Strategy::LightDivision,
        Strategy::Lookup,
        Strategy::Floor,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::HeavyDivision => "Integer Division (Heavy)",
            Strategy::LightDivision => "Integer Division (Light)",
            Strategy::Lookup => "Lookup",
            Strategy::Floor => "Floor",
        }
    }

    /// Block index (`0..=8`) of `cell` (`0..=80`). Out of range cells are not checked.
    pub fn block_index(self, cell: usize) -> usize {
        match self {
            Strategy::HeavyDivision => heavy_division(cell),
            Strategy::LightDivision => light_division(cell),
            Strategy::Lookup => lookup(cell),
            Strategy::Floor => floor(cell),
        }
    }

    /// Sum of the block index over all cells, `iterations` times.
    ///
    /// Dispatch happens once, outside the loop, so every variant gets its own
    /// monomorphized copy of [`bench::summation`] with the index function inlined.
    pub fn summation(self, iterations: u64) -> u64 {
        match self {
            Strategy::HeavyDivision => bench::summation(heavy_division, iterations),
            Strategy::LightDivision => bench::summation(light_division, iterations),
            Strategy::Lookup => bench::summation(lookup, iterations),
            Strategy::Floor => bench::summation(floor, iterations),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy disagreeing with [`canonical`] on some cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub strategy: Strategy,
    pub cell: usize,
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: cell {} maps to block {}, expected {}",
            self.strategy, self.cell, self.actual, self.expected
        )
    }
}

impl std::error::Error for Mismatch {}

/// Check every strategy against [`canonical`] on all 81 cells.
pub fn check_equivalence() -> Result<(), Mismatch> {
    for strategy in Strategy::ALL {
        for cell in 0..NUM_CELLS {
            let expected = canonical(cell);
            let actual = strategy.block_index(cell);
            if actual != expected {
                return Err(Mismatch {
                    strategy,
                    cell,
                    expected,
                    actual,
                });
            }
        }
    }
    log::debug!(
        "{} strategies agree on all {} cells",
        Strategy::ALL.len(),
        NUM_CELLS
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::{GRID_SIZE, block_index_sum};

    #[test]
    fn test_strategies_agree_with_canonical() {
        for cell in 0..NUM_CELLS {
            let expected = canonical(cell);
            assert!(expected < GRID_SIZE);
            for strategy in Strategy::ALL {
                assert_eq!(
                    strategy.block_index(cell),
                    expected,
                    "{} disagrees on cell {}",
                    strategy,
                    cell
                );
            }
        }
        assert_eq!(check_equivalence(), Ok(()));
    }

    #[test]
    fn test_lookup_table() {
        let computed = (0..NUM_CELLS).map(canonical).collect::<Vec<_>>();
        let table = LOOKUP.iter().map(|&v| v as usize).collect::<Vec<_>>();
        assert_eq!(computed, table);
        assert_eq!(
            LOOKUP.iter().map(|&v| v as u64).sum::<u64>(),
            block_index_sum()
        );
    }

    #[test]
    fn test_block_corners() {
        // top-left cell of each block
        let corners = [0, 3, 6, 27, 30, 33, 54, 57, 60];
        for (block, &cell) in corners.iter().enumerate() {
            for strategy in Strategy::ALL {
                assert_eq!(strategy.block_index(cell), block);
                assert_eq!(strategy.block_index(cell + 20), block);
            }
        }
        assert_eq!(floor(80), 8);
        assert_eq!(heavy_division(80), 8);
    }

    #[test]
    fn test_summation() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.summation(0), 0);
            assert_eq!(strategy.summation(1), 324);
            assert_eq!(strategy.summation(1000), 324_000);
        }
    }

    #[test]
    fn test_names() {
        let names = Strategy::ALL.map(Strategy::name);
        assert_eq!(
            names,
            [
                "Integer Division (Heavy)",
                "Integer Division (Light)",
                "Lookup",
                "Floor"
            ]
        );
        assert_eq!(Strategy::Lookup.to_string(), "Lookup");
    }

    #[test]
    fn test_mismatch_display() {
        let err = Mismatch {
            strategy: Strategy::Floor,
            cell: 10,
            expected: 0,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Floor: cell 10 maps to block 1, expected 0"
        );
    }
}
