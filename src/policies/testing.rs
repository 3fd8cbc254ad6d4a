use crate::arms::RewardSource;

use rand::RngCore;
use std::cell::RefCell;
use std::rc::Rc;

pub type PlayLog = Rc<RefCell<Vec<usize>>>;

/// Deterministic arms: every pull of arm `i` yields `rewards[i]`. The shared
/// log records the arm sequence so tests can inspect it after the problem
/// took ownership of the source.
#[derive(Debug)]
pub struct ScriptedArms {
    means: Vec<f64>,
    rewards: Vec<f64>,
    log: PlayLog,
}

impl ScriptedArms {
    pub fn new(means: Vec<f64>, rewards: Vec<f64>) -> (Self, PlayLog) {
        let log = PlayLog::default();
        let source = Self {
            means,
            rewards,
            log: Rc::clone(&log),
        };
        (source, log)
    }
}

impl RewardSource for ScriptedArms {
    fn means(&self) -> &[f64] {
        &self.means
    }

    fn pull(&self, arm_id: usize, _: &mut dyn RngCore) -> f64 {
        self.log.borrow_mut().push(arm_id);
        self.rewards[arm_id]
    }
}
