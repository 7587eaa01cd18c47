//! Readiness tracking for the five images.
//!
//! The gate is a pure reducer: loaders report completions in any order via
//! [`AssetGate::apply`], and the gate answers with a [`GateTransition`]. It
//! yields [`GateTransition::Opened`] exactly once, on the report that makes
//! every image ready, and ignores anything that arrives afterwards.

use super::error::AssetError;
use super::types::{Dimensions, ImageAsset, SpriteSheet};

/// A completion report from a loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetEvent {
    Ready {
        asset: ImageAsset,
        dimensions: Dimensions,
    },
    Failed {
        asset: ImageAsset,
        error: AssetError,
    },
}

/// Load status of a single image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetStatus {
    Pending,
    Ready(Dimensions),
    Failed(AssetError),
}

/// What a report did to the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateTransition {
    /// Still waiting on other images.
    Waiting,
    /// This report completed the set. Produced once per gate.
    Opened(SpriteSheet),
    /// The gate can no longer open. Produced once per gate.
    Failed(AssetError),
    /// Duplicate report, or the gate had already opened or failed.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Collecting,
    Open,
    Closed,
}

#[derive(Debug, Clone)]
pub struct AssetGate {
    statuses: [AssetStatus; 5],
    state: GateState,
}

impl Default for AssetGate {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetGate {
    pub fn new() -> Self {
        Self {
            statuses: [
                AssetStatus::Pending,
                AssetStatus::Pending,
                AssetStatus::Pending,
                AssetStatus::Pending,
                AssetStatus::Pending,
            ],
            state: GateState::Collecting,
        }
    }

    pub fn status(&self, asset: ImageAsset) -> &AssetStatus {
        &self.statuses[asset.index()]
    }

    pub fn all_ready(&self) -> bool {
        self.statuses
            .iter()
            .all(|s| matches!(s, AssetStatus::Ready(_)))
    }

    pub fn ready_count(&self) -> usize {
        self.statuses
            .iter()
            .filter(|s| matches!(s, AssetStatus::Ready(_)))
            .count()
    }

    pub fn pending(&self) -> Vec<ImageAsset> {
        ImageAsset::ALL
            .into_iter()
            .filter(|a| matches!(self.status(*a), AssetStatus::Pending))
            .collect()
    }

    pub fn is_collecting(&self) -> bool {
        self.state == GateState::Collecting
    }

    pub fn is_open(&self) -> bool {
        self.state == GateState::Open
    }

    /// Dimensions of every image, once all are ready.
    pub fn sprite_sheet(&self) -> Option<SpriteSheet> {
        let mut dimensions = [Dimensions::new(0, 0); 5];
        for (slot, status) in dimensions.iter_mut().zip(self.statuses.iter()) {
            match status {
                AssetStatus::Ready(d) => *slot = *d,
                _ => return None,
            }
        }
        Some(SpriteSheet::from_dimensions(dimensions))
    }

    pub fn apply(&mut self, event: AssetEvent) -> GateTransition {
        match event {
            AssetEvent::Ready { asset, dimensions } => self.report_ready(asset, dimensions),
            AssetEvent::Failed { asset, error } => self.report_failed(asset, error),
        }
    }

    pub fn report_ready(&mut self, asset: ImageAsset, dimensions: Dimensions) -> GateTransition {
        if !self.is_collecting() || self.status(asset) != &AssetStatus::Pending {
            return GateTransition::Ignored;
        }
        self.statuses[asset.index()] = AssetStatus::Ready(dimensions);

        match self.sprite_sheet() {
            Some(sheet) => {
                self.state = GateState::Open;
                GateTransition::Opened(sheet)
            }
            None => GateTransition::Waiting,
        }
    }

    pub fn report_failed(&mut self, asset: ImageAsset, error: AssetError) -> GateTransition {
        if !self.is_collecting() || self.status(asset) != &AssetStatus::Pending {
            return GateTransition::Ignored;
        }
        self.statuses[asset.index()] = AssetStatus::Failed(error.clone());
        self.close(error)
    }

    /// Give up on the images still pending.
    pub fn time_out(&mut self) -> GateTransition {
        if !self.is_collecting() {
            return GateTransition::Ignored;
        }
        let pending = self.pending();
        self.close(AssetError::TimedOut { pending })
    }

    /// Fail the gate for a reason not tied to a single image.
    pub fn fail(&mut self, error: AssetError) -> GateTransition {
        if !self.is_collecting() {
            return GateTransition::Ignored;
        }
        self.close(error)
    }

    fn close(&mut self, error: AssetError) -> GateTransition {
        self.state = GateState::Closed;
        GateTransition::Failed(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permutations(items: &[ImageAsset]) -> Vec<Vec<ImageAsset>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn test_new_gate_is_pending() {
        let gate = AssetGate::new();
        assert!(!gate.all_ready());
        assert!(gate.is_collecting());
        assert_eq!(gate.pending().len(), 5);
        assert!(gate.sprite_sheet().is_none());
    }

    #[test]
    fn test_opens_once_for_every_arrival_order() {
        let orders = permutations(&ImageAsset::ALL);
        assert_eq!(orders.len(), 120);

        for order in orders {
            let mut gate = AssetGate::new();
            let mut opened = 0;
            for (i, asset) in order.iter().enumerate() {
                let transition = gate.report_ready(*asset, asset.builtin_dimensions());
                match transition {
                    GateTransition::Opened(sheet) => {
                        opened += 1;
                        assert_eq!(i, 4, "opened early for {:?}", order);
                        assert_eq!(sheet, SpriteSheet::builtin());
                    }
                    GateTransition::Waiting => assert!(i < 4),
                    other => panic!("unexpected {:?} for {:?}", other, order),
                }
            }
            assert_eq!(opened, 1);
            assert!(gate.is_open());
            assert!(gate.all_ready());
        }
    }

    #[test]
    fn test_duplicate_report_is_ignored() {
        let mut gate = AssetGate::new();
        let dims = Dimensions::new(38, 26);
        assert_eq!(gate.report_ready(ImageAsset::Bird, dims), GateTransition::Waiting);
        assert_eq!(gate.report_ready(ImageAsset::Bird, dims), GateTransition::Ignored);
        assert_eq!(gate.ready_count(), 1);
    }

    #[test]
    fn test_reports_after_open_are_ignored() {
        let mut gate = AssetGate::new();
        for asset in ImageAsset::ALL {
            gate.report_ready(asset, asset.builtin_dimensions());
        }
        assert!(gate.is_open());
        assert_eq!(
            gate.report_ready(ImageAsset::Bird, Dimensions::new(1, 1)),
            GateTransition::Ignored
        );
        assert_eq!(gate.time_out(), GateTransition::Ignored);
        assert_eq!(
            gate.sprite_sheet().map(|s| s.bird()),
            Some(Dimensions::new(38, 26))
        );
    }

    #[test]
    fn test_failure_closes_gate() {
        let mut gate = AssetGate::new();
        gate.report_ready(ImageAsset::Bird, Dimensions::new(38, 26));
        let error = AssetError::Decode {
            asset: ImageAsset::Background,
            reason: "bad header".to_string(),
        };
        assert_eq!(
            gate.report_failed(ImageAsset::Background, error.clone()),
            GateTransition::Failed(error.clone())
        );
        assert!(!gate.is_collecting());
        assert_eq!(
            gate.status(ImageAsset::Background),
            &AssetStatus::Failed(error)
        );

        // Remaining images can no longer open the gate
        for asset in [
            ImageAsset::PipeNorth,
            ImageAsset::PipeSouth,
            ImageAsset::Foreground,
        ] {
            assert_eq!(
                gate.report_ready(asset, asset.builtin_dimensions()),
                GateTransition::Ignored
            );
        }
        assert!(!gate.is_open());
    }

    #[test]
    fn test_time_out_lists_pending_assets() {
        let mut gate = AssetGate::new();
        gate.report_ready(ImageAsset::Bird, Dimensions::new(38, 26));
        gate.report_ready(ImageAsset::Background, Dimensions::new(288, 512));

        match gate.time_out() {
            GateTransition::Failed(AssetError::TimedOut { pending }) => {
                assert_eq!(
                    pending,
                    vec![
                        ImageAsset::PipeNorth,
                        ImageAsset::PipeSouth,
                        ImageAsset::Foreground
                    ]
                );
            }
            other => panic!("expected timeout, got {:?}", other),
        }
        assert_eq!(gate.time_out(), GateTransition::Ignored);
    }

    #[test]
    fn test_apply_dispatches_events() {
        let mut gate = AssetGate::new();
        let transition = gate.apply(AssetEvent::Ready {
            asset: ImageAsset::Foreground,
            dimensions: Dimensions::new(306, 118),
        });
        assert_eq!(transition, GateTransition::Waiting);

        let transition = gate.apply(AssetEvent::Failed {
            asset: ImageAsset::Bird,
            error: AssetError::LoaderDisconnected,
        });
        assert_eq!(
            transition,
            GateTransition::Failed(AssetError::LoaderDisconnected)
        );
    }
}
