use super::*;
use alloc::vec::Vec;

/// Places mines at caller-chosen locations, only the size of the config is used.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    candidates: Vec<Candidate>,
}

impl FixedMineGenerator {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, config: GameConfig) -> MineLayout {
        let layout = MineLayout::from_candidates(config.size, self.candidates);
        log::debug!(
            "Placed {} fixed mines on a {:?} board",
            layout.mine_count(),
            config.size
        );
        layout
    }
}
