//! Ripple lifecycle for activatable controls.
//!
//! # Design
//! - Each control owns one [`RippleQueue`]; ids are local to that queue.
//! - Ripples are appended at the tail and only ever removed from the head.
//! - Every ripple lives for [`RIPPLE_LIFETIME_MS`], so head order is expiry order.

use std::collections::VecDeque;

/// How long a ripple stays on screen.
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Bounding box of the control, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

/// A single ripple, positioned relative to the control's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    /// Left offset of the ripple's square.
    pub x: f64,
    /// Top offset of the ripple's square.
    pub y: f64,
    /// Side of the square; the larger of the control's width and height.
    pub size: f64,
    /// Sequence number, strictly increasing per queue.
    pub id: u64,
}

impl Ripple {
    /// Place a ripple centred on the activation point.
    #[must_use]
    pub fn centred_on(id: u64, bounds: Bounds, client_x: f64, client_y: f64) -> Self {
        let size = bounds.width.max(bounds.height);
        Self {
            x: client_x - bounds.left - size / 2.0,
            y: client_y - bounds.top - size / 2.0,
            size,
            id,
        }
    }
}

/// What the control should do after a pointer activation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Activation {
    /// Disabled control: no ripple and no handler call.
    Ignored,
    /// Forward the event to the caller; `ripple` is set when one was spawned.
    Forward {
        /// Newly spawned ripple, absent when the control had no measurable bounds.
        ripple: Option<Ripple>,
    },
}

/// Active ripples of one control, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RippleQueue {
    active: VecDeque<Ripple>,
    next_id: u64,
}

impl RippleQueue {
    /// Empty queue whose first ripple gets id 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a pointer activation at `(client_x, client_y)`.
    ///
    /// `bounds` is `None` when the control is not mounted yet; the event is
    /// still forwarded but no ripple is spawned.
    pub fn activate(
        &mut self,
        disabled: bool,
        bounds: Option<Bounds>,
        client_x: f64,
        client_y: f64,
    ) -> Activation {
        if disabled {
            return Activation::Ignored;
        }
        let ripple = bounds.map(|bounds| {
            let ripple = Ripple::centred_on(self.next_id, bounds, client_x, client_y);
            self.next_id += 1;
            self.active.push_back(ripple);
            ripple
        });
        Activation::Forward { ripple }
    }

    /// Retire the ripple `id` once its lifetime has elapsed.
    ///
    /// Pops from the head while the head's id is not newer than `id`, so a
    /// late or repeated expiry is a no-op. Returns how many ripples were removed.
    pub fn expire(&mut self, id: u64) -> usize {
        let mut removed = 0;
        while self.active.front().is_some_and(|head| head.id <= id) {
            self.active.pop_front();
            removed += 1;
        }
        removed
    }

    /// Active ripples, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.active.iter()
    }

    /// Whether ripple `id` is still displayed.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.active.iter().any(|ripple| ripple.id == id)
    }

    /// Number of active ripples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no ripple is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Bounds = Bounds {
        left: 10.0,
        top: 20.0,
        width: 120.0,
        height: 40.0,
    };

    fn spawned(activation: Activation) -> Option<Ripple> {
        match activation {
            Activation::Forward { ripple } => ripple,
            Activation::Ignored => None,
        }
    }

    #[test]
    fn ripple_is_centred_and_covers_the_control() {
        let mut queue = RippleQueue::new();
        let ripple = spawned(queue.activate(false, Some(BOUNDS), 70.0, 40.0));
        assert_eq!(
            ripple,
            Some(Ripple {
                x: 70.0 - 10.0 - 60.0,
                y: 40.0 - 20.0 - 60.0,
                size: 120.0,
                id: 0,
            })
        );
    }

    #[test]
    fn tall_controls_use_height_as_size() {
        let bounds = Bounds {
            left: 0.0,
            top: 0.0,
            width: 24.0,
            height: 48.0,
        };
        let ripple = Ripple::centred_on(3, bounds, 12.0, 24.0);
        assert!((ripple.size - 48.0).abs() < f64::EPSILON);
        assert!((ripple.x - -12.0).abs() < f64::EPSILON);
        assert!(ripple.y.abs() < f64::EPSILON);
    }

    #[test]
    fn disabled_control_ignores_activation() {
        let mut queue = RippleQueue::new();
        for _ in 0..5 {
            assert_eq!(
                queue.activate(true, Some(BOUNDS), 1.0, 1.0),
                Activation::Ignored
            );
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn unmounted_control_forwards_without_ripple() {
        let mut queue = RippleQueue::new();
        assert_eq!(
            queue.activate(false, None, 1.0, 1.0),
            Activation::Forward { ripple: None }
        );
        assert!(queue.is_empty());
        let next = spawned(queue.activate(false, Some(BOUNDS), 1.0, 1.0));
        assert_eq!(next.map(|ripple| ripple.id), Some(0));
    }

    #[test]
    fn ids_increase_and_expiry_is_fifo() {
        let mut queue = RippleQueue::new();
        for _ in 0..3 {
            queue.activate(false, Some(BOUNDS), 0.0, 0.0);
        }
        let ids: Vec<u64> = queue.iter().map(|ripple| ripple.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);

        assert_eq!(queue.expire(0), 1);
        assert!(!queue.contains(0));
        assert!(queue.contains(1));
        assert_eq!(queue.expire(1), 1);
        assert_eq!(queue.iter().map(|ripple| ripple.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn repeated_or_stale_expiry_is_a_no_op() {
        let mut queue = RippleQueue::new();
        queue.activate(false, Some(BOUNDS), 0.0, 0.0);
        queue.activate(false, Some(BOUNDS), 0.0, 0.0);
        assert_eq!(queue.expire(0), 1);
        assert_eq!(queue.expire(0), 0);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.expire(1), 1);
        assert_eq!(queue.expire(1), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn active_count_matches_recent_activations() {
        // (time of activation in ms), replayed against a simulated clock.
        let clicks = [0_u32, 100, 250, 700, 720, 1300, 1310, 1320, 2500];
        let mut queue = RippleQueue::new();
        let mut pending: Vec<(u32, u64)> = Vec::new();

        for (index, &at) in clicks.iter().enumerate() {
            pending.retain(|&(due, id)| {
                if due <= at {
                    queue.expire(id);
                    false
                } else {
                    true
                }
            });
            if let Some(ripple) = spawned(queue.activate(false, Some(BOUNDS), 5.0, 5.0)) {
                pending.push((at + RIPPLE_LIFETIME_MS, ripple.id));
            }
            let recent = clicks[..=index]
                .iter()
                .filter(|&&earlier| at < earlier + RIPPLE_LIFETIME_MS)
                .count();
            assert_eq!(queue.len(), recent, "at {at}ms");
            let ids: Vec<u64> = queue.iter().map(|ripple| ripple.id).collect();
            assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }
}
