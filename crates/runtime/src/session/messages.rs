//! Fading message log shown under the lane.

use std::collections::VecDeque;

/// One line and the frames it stays visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub frames_left: u32,
}

/// Bounded log of recent messages; oldest lines drop first.
#[derive(Clone, Debug)]
pub struct MessageLog {
    lines: VecDeque<Message>,
    capacity: usize,
    duration: u32,
}

impl MessageLog {
    pub const DEFAULT_CAPACITY: usize = 6;

    pub fn new(duration: u32) -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY, duration)
    }

    pub fn with_capacity(capacity: usize, duration: u32) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            duration,
        }
    }

    pub fn push(&mut self, text: impl Into<String>) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(Message {
            text: text.into(),
            frames_left: self.duration,
        });
    }

    /// Ages every line by one frame and drops the faded ones.
    pub fn tick(&mut self) {
        for line in &mut self.lines {
            line.frames_left = line.frames_left.saturating_sub(1);
        }
        self.lines.retain(|line| line.frames_left > 0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
