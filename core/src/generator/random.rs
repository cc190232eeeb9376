use super::*;
use ndarray::Array2;

/// Purely random placement: `mines` distinct cells sampled uniformly without replacement.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        use rand::{SeedableRng, rngs::SmallRng, seq::index};

        let total_cells = config.total_cells();
        let mines = if config.mines > total_cells {
            log::warn!(
                "Board too small, requested {} mines but only {} fit",
                config.mines,
                total_cells
            );
            total_cells
        } else {
            config.mines
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());

        // flat indices run left to right, top to bottom
        for index in index::sample(&mut rng, usize::from(total_cells), usize::from(mines)) {
            mine_mask[unflatten(index, config.size).to_nd_index()] = true;
        }

        let layout = MineLayout::from_sized_mask(mine_mask);
        log::debug!(
            "Placed {} random mines on a {:?} board with seed {}",
            layout.mine_count(),
            config.size,
            self.seed
        );
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exact_count() {
        for seed in 0..20 {
            let layout = RandomMineGenerator::new(seed).generate(GameConfig::default());

            assert_eq!(layout.mine_count(), 10);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = GameConfig::new((16, 16), 40);

        let a = RandomMineGenerator::new(7).generate(config);
        let b = RandomMineGenerator::new(7).generate(config);
        let c = RandomMineGenerator::new(8).generate(config);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn clamps_to_board_size() {
        let config = GameConfig::new_unchecked((2, 2), 9);

        let layout = RandomMineGenerator::new(1).generate(config);

        assert_eq!(layout.mine_count(), 4);
    }

    #[test]
    fn non_square_board() {
        let config = GameConfig::new((3, 7), 21);

        let layout = RandomMineGenerator::new(3).generate(config);

        assert_eq!(layout.size(), (3, 7));
        assert_eq!(layout.mine_count(), 21);
    }
}
