//! Shared test infrastructure for led-toggle integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use led_toggle::{
    Error, LINE_COUNT, LINE_OFFSETS, LineError, LineProvider, LineSet, ModeSource, OutputLine,
    Selection,
};

// ============================================================================
// Mock GPIO board
// ============================================================================

/// Everything that happened to a mock line, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    Acquire { offset: u8 },
    Write { index: usize, offset: u8, high: bool },
    Revert { offset: u8 },
    Release { offset: u8 },
}

#[derive(Debug, Default)]
struct BoardState {
    events: Vec<LineEvent>,
    writes: usize,
    acquired: usize,
}

/// Mock line provider that journals every line operation
#[derive(Debug, Clone, Default)]
pub struct MockBoard {
    state: Arc<Mutex<BoardState>>,
    fail_on_write: Option<usize>,
    fail_on_acquire: Option<u8>,
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the `n`th write (1-based) across all lines
    pub fn failing_write(n: usize) -> Self {
        Self {
            fail_on_write: Some(n),
            ..Self::default()
        }
    }

    /// Fails acquisition of `offset`
    pub fn failing_acquire(offset: u8) -> Self {
        Self {
            fail_on_acquire: Some(offset),
            ..Self::default()
        }
    }

    /// Acquires the standard line set
    pub fn line_set(&self) -> LineSet<MockLine> {
        LineSet::acquire(&mut self.clone(), &LINE_OFFSETS).unwrap()
    }

    pub fn events(&self) -> Vec<LineEvent> {
        self.state.lock().unwrap().events.clone()
    }

    pub fn write_count(&self) -> usize {
        self.state.lock().unwrap().writes
    }

    /// Patterns applied to the full line set, in order
    ///
    /// A pattern counts once its last line has been written.
    pub fn applied_patterns(&self) -> Vec<u16> {
        let mut pattern = 0u16;
        let mut patterns = Vec::new();

        for event in self.events() {
            if let LineEvent::Write { index, high, .. } = event {
                if high {
                    pattern |= 1u16 << index;
                } else {
                    pattern &= !(1u16 << index);
                }
                if index == LINE_COUNT - 1 {
                    patterns.push(pattern);
                }
            }
        }

        patterns
    }

    /// Current level of each line by index
    pub fn levels(&self) -> [bool; LINE_COUNT] {
        let mut levels = [false; LINE_COUNT];
        for event in self.events() {
            if let LineEvent::Write { index, high, .. } = event {
                levels[index] = high;
            }
        }
        levels
    }

    pub fn reverts(&self, offset: u8) -> usize {
        self.count(|event| *event == LineEvent::Revert { offset })
    }

    pub fn releases(&self, offset: u8) -> usize {
        self.count(|event| *event == LineEvent::Release { offset })
    }

    /// True if every standard line was reverted and released exactly once
    pub fn all_released_once(&self) -> bool {
        LINE_OFFSETS
            .iter()
            .all(|&offset| self.reverts(offset) == 1 && self.releases(offset) == 1)
    }

    fn count(&self, predicate: impl Fn(&LineEvent) -> bool) -> usize {
        self.events().iter().filter(|event| predicate(event)).count()
    }

    fn record(&self, event: LineEvent) {
        self.state.lock().unwrap().events.push(event);
    }
}

impl LineProvider for MockBoard {
    type Line = MockLine;

    fn acquire_output(&mut self, offset: u8) -> Result<Self::Line, LineError> {
        if self.fail_on_acquire == Some(offset) {
            return Err(LineError::Acquire {
                offset,
                source: "mock acquire failure".into(),
            });
        }

        let index = {
            let mut state = self.state.lock().unwrap();
            state.events.push(LineEvent::Acquire { offset });
            state.acquired += 1;
            state.acquired - 1
        };

        Ok(MockLine {
            index,
            offset,
            board: self.clone(),
        })
    }
}

pub struct MockLine {
    index: usize,
    offset: u8,
    board: MockBoard,
}

impl OutputLine for MockLine {
    fn offset(&self) -> u8 {
        self.offset
    }

    fn set_level(&mut self, high: bool) -> Result<(), LineError> {
        let mut state = self.board.state.lock().unwrap();
        state.writes += 1;
        if self.board.fail_on_write == Some(state.writes) {
            return Err(LineError::Write {
                offset: self.offset,
                source: "mock write failure".into(),
            });
        }

        state.events.push(LineEvent::Write {
            index: self.index,
            offset: self.offset,
            high,
        });
        Ok(())
    }

    fn revert_to_input(&mut self) -> Result<(), LineError> {
        self.board.record(LineEvent::Revert {
            offset: self.offset,
        });
        Ok(())
    }

    fn release(self) {
        self.board.record(LineEvent::Release {
            offset: self.offset,
        });
    }
}

// ============================================================================
// Mock mode sources
// ============================================================================

/// Hands out a fixed list of selections, then quits
pub struct ScriptedModes {
    selections: VecDeque<Selection>,
    prompts: Arc<AtomicUsize>,
}

impl ScriptedModes {
    pub fn new(selections: impl IntoIterator<Item = Selection>) -> Self {
        Self {
            selections: selections.into_iter().collect(),
            prompts: Arc::default(),
        }
    }

    /// Counter of how many times a selection was requested
    pub fn prompt_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.prompts)
    }
}

impl ModeSource for ScriptedModes {
    async fn next_selection(&mut self) -> Result<Selection, Error> {
        self.prompts.fetch_add(1, Ordering::SeqCst);
        Ok(self.selections.pop_front().unwrap_or(Selection::Quit))
    }
}

/// An operator who never answers
pub struct SilentModes;

impl ModeSource for SilentModes {
    async fn next_selection(&mut self) -> Result<Selection, Error> {
        std::future::pending().await
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn console_lines(console: &[u8]) -> Vec<String> {
    String::from_utf8(console.to_vec())
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}
