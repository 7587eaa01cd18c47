//! Scrolling pipe pairs.
//!
//! Pairs are appended at the right edge and drift left one step per tick, so
//! insertion order and decreasing `x` are the same order. Only the newest
//! pair is consulted when deciding whether to spawn.

use super::config::GameConfig;
use super::geometry::Rect;
use crate::assets::{Dimensions, SpriteSheet};
use rand::Rng;
use std::ops::RangeInclusive;

/// An upper and a lower pipe sharing one column, separated by the gap.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstaclePair {
    /// Left edge shared by both pipes.
    pub x: i32,
    /// How far the upper pipe reaches down from the top of the surface.
    pub upper_height: u32,
    pub upper: Rect,
    pub lower: Rect,
}

impl ObstaclePair {
    pub fn new(x: i32, upper_height: u32, gap: u32, north: Dimensions, south: Dimensions) -> Self {
        let upper = Rect::new(
            x as f64,
            upper_height as f64 - north.height as f64,
            north.width as f64,
            north.height as f64,
        );
        let lower = Rect::new(
            x as f64,
            (upper_height + gap) as f64,
            south.width as f64,
            south.height as f64,
        );
        Self {
            x,
            upper_height,
            upper,
            lower,
        }
    }

    pub fn width(&self) -> i32 {
        self.upper.width as i32
    }

    /// Right edge of the upper pipe.
    pub fn trailing_edge(&self) -> i32 {
        self.x + self.width()
    }

    /// Top of the opening between the pipes.
    pub fn gap_top(&self) -> f64 {
        self.upper.bottom()
    }

    /// Bottom of the opening between the pipes.
    pub fn gap_bottom(&self) -> f64 {
        self.lower.y
    }

    fn shift_left(&mut self, step: i32) {
        self.x -= step;
        self.upper.x = self.x as f64;
        self.lower.x = self.x as f64;
    }
}

/// Spawn geometry derived from the config and the pipe images.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstacleLayout {
    pub surface_width: i32,
    pub surface_height: u32,
    pub gap: u32,
    pub min_upper_height: u32,
    pub step: i32,
    pub spacing_factor: i32,
    pub north: Dimensions,
    pub south: Dimensions,
}

impl ObstacleLayout {
    pub fn new(config: &GameConfig, sprites: &SpriteSheet) -> Self {
        Self {
            surface_width: config.surface_width as i32,
            surface_height: config.surface_height,
            gap: config.pipe_gap,
            min_upper_height: config.min_pipe_height,
            step: config.pipe_step,
            spacing_factor: config.pipe_spacing_factor as i32,
            north: sprites.pipe_north(),
            south: sprites.pipe_south(),
        }
    }

    /// Newest pair must be at or left of this column before another spawns.
    pub fn spawn_threshold(&self) -> i32 {
        self.surface_width - self.spacing_factor * self.north.width as i32
    }

    /// Inclusive range the upper pipe height is drawn from.
    pub fn upper_height_range(&self) -> RangeInclusive<u32> {
        let max = self.surface_height.saturating_sub(self.gap) / 2;
        self.min_upper_height..=max.max(self.min_upper_height)
    }
}

/// Ordered pipe pairs, oldest (leftmost) first.
#[derive(Debug, Clone)]
pub struct ObstacleQueue {
    layout: ObstacleLayout,
    pairs: Vec<ObstaclePair>,
}

impl ObstacleQueue {
    pub fn new(layout: ObstacleLayout) -> Self {
        Self {
            layout,
            pairs: Vec::new(),
        }
    }

    pub fn layout(&self) -> &ObstacleLayout {
        &self.layout
    }

    pub fn pairs(&self) -> &[ObstaclePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// All rectangles as adjacent (upper, lower) entries.
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.pairs.iter().flat_map(|p| [&p.upper, &p.lower])
    }

    /// Append a pair at `x` with a chosen upper height.
    pub fn push_pair(&mut self, x: i32, upper_height: u32) {
        let pair = ObstaclePair::new(
            x,
            upper_height,
            self.layout.gap,
            self.layout.north,
            self.layout.south,
        );
        self.pairs.push(pair);
    }

    /// Move every pair one step left.
    pub fn advance(&mut self) {
        let step = self.layout.step;
        for pair in &mut self.pairs {
            pair.shift_left(step);
        }
    }

    /// Append a new pair at the right edge when the queue is empty or the
    /// newest pair has moved far enough in. Returns whether one was added.
    pub fn maybe_spawn<R: Rng>(&mut self, rng: &mut R) -> bool {
        let due = match self.pairs.last() {
            None => true,
            Some(newest) => newest.x <= self.layout.spawn_threshold(),
        };
        if !due {
            return false;
        }

        let upper_height = rng.gen_range(self.layout.upper_height_range());
        self.push_pair(self.layout.surface_width, upper_height);
        true
    }

    /// Drop pairs whose trailing edge has left the surface. Returns how many.
    pub fn prune(&mut self) -> usize {
        let before = self.pairs.len();
        self.pairs.retain(|p| p.trailing_edge() > 0);
        before - self.pairs.len()
    }
}
