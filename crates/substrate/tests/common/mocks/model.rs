use skiff_core::common::data::MarchBits;
use skiff_core::core::traits::Substrate;
use skiff_core::model::Model;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Standard init pass: every GPR from the reset table, PC from the reset
/// PC. Mirrors what a generated model does.
pub fn standard_init(core: &mut dyn Substrate) {
    for idx in 0..32u8 {
        let value = core.reset_value(idx);
        core.write_gpr(idx, value);
    }
    let _ = core.set_pc(core.reset_pc());
}

/// Model that performs no substrate access at all: the PC never moves.
#[derive(Debug, Default)]
pub struct IdleModel;

impl Model for IdleModel {
    fn init(&mut self, core: &mut dyn Substrate) {
        standard_init(core);
    }

    fn step(&mut self, _core: &mut dyn Substrate) {}
}

/// Model that records the reset level it observes on every step, then
/// advances the PC.
///
/// The recordings stay reachable after the model moves into a simulator:
/// grab a handle with [`ResetProbeModel::observer`] first.
#[derive(Debug, Default)]
pub struct ResetProbeModel {
    observed: Rc<RefCell<Vec<bool>>>,
}

impl ResetProbeModel {
    pub fn observer(&self) -> Rc<RefCell<Vec<bool>>> {
        Rc::clone(&self.observed)
    }
}

impl Model for ResetProbeModel {
    fn init(&mut self, core: &mut dyn Substrate) {
        standard_init(core);
    }

    fn step(&mut self, core: &mut dyn Substrate) {
        self.observed.borrow_mut().push(core.is_reset());
        let pc = core.get_pc();
        let _ = core.set_pc(pc.wrapping_add(4));
    }
}

/// One step's worth of scripted substrate activity.
#[derive(Debug, Clone, Copy)]
pub enum Action {
    /// Store `data` at `address` with the given width in bytes.
    Store {
        address: MarchBits,
        data: MarchBits,
        width: u8,
    },
    /// Read `width` bytes at `address`, discarding the value.
    Load { address: MarchBits, width: u8 },
    /// Write a GPR.
    WriteGpr { index: u8, value: MarchBits },
    /// Issue an instruction-fetch barrier.
    FenceI,
    /// Execute nothing but still advance the PC.
    Advance,
    /// Do nothing at all; the PC holds.
    Idle,
}

/// Model driven by a queue of actions, one per step.
///
/// Every action except `Idle` advances the PC by one instruction after
/// its effect, so scripted runs do not trip the stall detector. An
/// exhausted queue behaves as `Idle`.
#[derive(Debug, Default)]
pub struct ScriptedModel {
    actions: VecDeque<Action>,
}

impl ScriptedModel {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }
}

impl Model for ScriptedModel {
    fn init(&mut self, core: &mut dyn Substrate) {
        standard_init(core);
    }

    fn step(&mut self, core: &mut dyn Substrate) {
        let action = self.actions.pop_front().unwrap_or(Action::Idle);
        match action {
            Action::Store {
                address,
                data,
                width,
            } => match width {
                1 => core.phy_write_byte(address, data as u8),
                2 => core.phy_write_half_word(address, data as u16),
                4 => core.phy_write_word(address, data as u32),
                _ => core.phy_write_double_word(address, data),
            },
            Action::Load { address, width } => match width {
                1 => {
                    let _ = core.phy_read_byte(address);
                }
                2 => {
                    let _ = core.phy_read_half_word(address);
                }
                4 => {
                    let _ = core.phy_read_word(address);
                }
                _ => {
                    let _ = core.phy_read_double_word(address);
                }
            },
            Action::WriteGpr { index, value } => core.write_gpr(index, value),
            Action::FenceI => core.fence_i(0, 0),
            Action::Advance | Action::Idle => {}
        }
        if !matches!(action, Action::Idle) {
            let pc = core.get_pc();
            let _ = core.set_pc(pc.wrapping_add(4));
        }
    }
}
