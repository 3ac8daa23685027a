//! Cosmetic progress shown while a research request is pending.
//!
//! Stages advance on local timers only. Nothing here reflects what the
//! service is actually doing.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ports::{TimerHandle, TimerPort};
use crate::store_bus::{StoreBus, StoreEvent};

pub const TICK_INTERVAL_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStage {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub duration_ms: u32,
}

pub const RESEARCH_STAGES: [ProgressStage; 6] = [
    ProgressStage {
        id: "planning",
        label: "Planning Research",
        description: "Analyzing your question and creating a research plan...",
        duration_ms: 3000,
    },
    ProgressStage {
        id: "generating",
        label: "Generating Sub-questions",
        description: "Breaking down your query into focused research questions...",
        duration_ms: 4000,
    },
    ProgressStage {
        id: "searching",
        label: "Searching Sources",
        description: "Searching across multiple sources for relevant information...",
        duration_ms: 8000,
    },
    ProgressStage {
        id: "analyzing",
        label: "Analyzing Results",
        description: "Reading and extracting key insights from sources...",
        duration_ms: 6000,
    },
    ProgressStage {
        id: "synthesizing",
        label: "Synthesizing Answer",
        description: "Combining information into a comprehensive response...",
        duration_ms: 5000,
    },
    ProgressStage {
        id: "refining",
        label: "Refining & Quality Check",
        description: "Improving answer quality and verifying accuracy...",
        duration_ms: 4000,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Completed,
    Current,
    Pending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    pub is_active: bool,
    /// Index of the stage shown as current.
    pub current: usize,
    /// Stages complete strictly in order, so this is also the count.
    pub completed: usize,
    pub elapsed_secs: u64,
}

impl ProgressState {
    pub fn stage_status(&self, index: usize) -> StageStatus {
        if index < self.completed {
            StageStatus::Completed
        } else if index == self.current {
            StageStatus::Current
        } else {
            StageStatus::Pending
        }
    }
}

struct Inner {
    stages: Vec<ProgressStage>,
    state: ProgressState,
    /// Bumped on every activation change; callbacks from an older
    /// generation are ignored.
    generation: u64,
    stage_timer: Option<TimerHandle>,
    tick_timer: Option<TimerHandle>,
}

/// Timer-driven stage sequence. Dropping the simulator cancels its timers.
pub struct ProgressSimulator {
    inner: Rc<RefCell<Inner>>,
    timers: Rc<dyn TimerPort>,
    bus: StoreBus,
}

impl ProgressSimulator {
    pub fn new(timers: Rc<dyn TimerPort>, bus: StoreBus) -> Self {
        Self::with_stages(RESEARCH_STAGES.to_vec(), timers, bus)
    }

    pub fn with_stages(stages: Vec<ProgressStage>, timers: Rc<dyn TimerPort>, bus: StoreBus) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                stages,
                state: ProgressState::default(),
                generation: 0,
                stage_timer: None,
                tick_timer: None,
            })),
            timers,
            bus,
        }
    }

    pub fn stages(&self) -> Vec<ProgressStage> {
        self.inner.borrow().stages.clone()
    }

    pub fn snapshot(&self) -> ProgressState {
        self.inner.borrow().state.clone()
    }

    pub fn is_active(&self) -> bool {
        self.inner.borrow().state.is_active
    }

    /// Follow an external activity flag. Only transitions matter:
    /// false→true restarts from stage zero, true→false tears down both
    /// timers. Repeating the current value does nothing.
    pub fn set_active(&self, active: bool) {
        if self.is_active() == active {
            return;
        }
        if active {
            self.start();
        } else {
            self.stop();
        }
    }

    fn start(&self) {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            inner.state = ProgressState {
                is_active: true,
                ..ProgressState::default()
            };
            inner.generation
        };
        log::debug!("Progress simulator started (generation {})", generation);
        self.bus.emit(StoreEvent::ProgressChanged);

        schedule_stage(&self.inner, &self.timers, &self.bus, generation, 0);

        let weak = Rc::downgrade(&self.inner);
        let bus = self.bus.clone();
        let tick = self.timers.set_interval(
            TICK_INTERVAL_MS,
            Box::new(move || {
                let Some(inner) = weak.upgrade() else { return };
                {
                    let mut guard = inner.borrow_mut();
                    if guard.generation != generation || !guard.state.is_active {
                        return;
                    }
                    guard.state.elapsed_secs += 1;
                }
                bus.emit(StoreEvent::ProgressChanged);
            }),
        );
        let previous = self.inner.borrow_mut().tick_timer.replace(tick);
        drop(previous);
    }

    fn stop(&self) {
        let (stage_timer, tick_timer) = {
            let mut inner = self.inner.borrow_mut();
            inner.generation += 1;
            inner.state.is_active = false;
            (inner.stage_timer.take(), inner.tick_timer.take())
        };
        // Cancel outside the borrow: a timer port may re-enter on cancel.
        drop(stage_timer);
        drop(tick_timer);
        log::debug!("Progress simulator stopped");
        self.bus.emit(StoreEvent::ProgressChanged);
    }
}

/// Arm the timer that completes stage `index`. The final stage gets no
/// timer: it stays current until deactivation.
fn schedule_stage(
    inner: &Rc<RefCell<Inner>>,
    timers: &Rc<dyn TimerPort>,
    bus: &StoreBus,
    generation: u64,
    index: usize,
) {
    let duration_ms = {
        let guard = inner.borrow();
        if index + 1 >= guard.stages.len() {
            return;
        }
        guard.stages[index].duration_ms
    };

    let weak = Rc::downgrade(inner);
    let timers_cb = timers.clone();
    let bus_cb = bus.clone();
    let handle = timers.set_timeout(
        duration_ms,
        Box::new(move || {
            let Some(inner) = weak.upgrade() else { return };
            {
                let mut guard = inner.borrow_mut();
                if guard.generation != generation || !guard.state.is_active {
                    return;
                }
                guard.state.completed = index + 1;
                guard.state.current = index + 1;
            }
            bus_cb.emit(StoreEvent::ProgressChanged);
            schedule_stage(&inner, &timers_cb, &bus_cb, generation, index + 1);
        }),
    );
    let previous = inner.borrow_mut().stage_timer.replace(handle);
    drop(previous);
}
