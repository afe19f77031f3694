use crate::state::State;
use std::collections::VecDeque;

/// Bounded, time-ordered record of visited states.
///
/// Insertion order is simulation-time order. Once a capacity bound is
/// exceeded the oldest points are evicted, never the newest, so the record
/// always holds the most recent window of the run. The record is never
/// empty: construction and [`reset`](Self::reset) both leave exactly the
/// seed point in place, and [`enforce_bound`](Self::enforce_bound) is only
/// called with a bound of at least 1 (validated at the session's
/// configuration boundary).
#[derive(Clone, Debug)]
pub struct Trajectory {
    points: VecDeque<State>,
}

impl Trajectory {
    /// Creates a record holding `seed`, with room reserved for `capacity`
    /// points.
    pub fn new(seed: State, capacity: usize) -> Self {
        let mut points = VecDeque::with_capacity(capacity);
        points.push_back(seed);
        Self { points }
    }

    /// Appends `state` as the newest point.
    pub fn append(&mut self, state: State) {
        self.points.push_back(state);
    }

    /// Evicts oldest points until at most `max_points` remain.
    ///
    /// O(1) per evicted point; the number evicted per call is bounded by
    /// the appends since the last enforcement. Survivors keep their
    /// relative order.
    pub fn enforce_bound(&mut self, max_points: usize) {
        while self.points.len() > max_points {
            self.points.pop_front();
        }
    }

    /// Clears the record and reseeds it with exactly one point.
    pub fn reset(&mut self, seed: State) {
        self.points.clear();
        self.points.push_back(seed);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recent point.
    pub fn latest(&self) -> State {
        // never empty: every mutator leaves at least one point behind
        self.points
            .back()
            .copied()
            .unwrap_or(State::ZERO)
    }

    /// Read-only view for one render pass: the two contiguous slice halves
    /// of the ring, oldest first. The consumer uploads both in order and
    /// must not hold the view across a mutation.
    pub fn snapshot(&self) -> (&[State], &[State]) {
        self.points.as_slices()
    }

    /// Iterates points oldest to newest.
    pub fn points(&self) -> impl Iterator<Item = &State> {
        self.points.iter()
    }
}
