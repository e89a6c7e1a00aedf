//! Evenly spaced points over a closed interval.

use std::iter::FusedIterator;

/// `points` evenly spaced values from `start` to `stop`, both included.
///
/// The iterator is `Clone`, so a copy taken before iteration restarts the sequence.
/// A single point yields just `start`; zero points yield nothing.
pub fn linspace(start: f64, stop: f64, points: usize) -> LinSpace {
    LinSpace {
        start,
        stop,
        points,
        front: 0,
        back: points,
    }
}

/// Iterator over the points of a [`linspace`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct LinSpace {
    start: f64,
    stop: f64,
    points: usize,
    front: usize,
    back: usize,
}

impl LinSpace {
    fn point(&self, index: usize) -> f64 {
        if index == 0 {
            return self.start;
        }
        let intervals = self.points - 1;
        if index == intervals {
            // The far endpoint is exact, never an accumulated approximation.
            return self.stop;
        }
        let span = self.stop - self.start;
        if span.is_finite() {
            // Scale before dividing: whole-number points stay whole for integer bounds.
            return self.start + span * index as f64 / intervals as f64;
        }
        // The interval is wider than f64 can hold; weigh the endpoints instead.
        let t = index as f64 / intervals as f64;
        self.start * (1.0 - t) + self.stop * t
    }
}

impl Iterator for LinSpace {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let value = self.point(self.front);
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for LinSpace {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.point(self.back))
    }
}

impl ExactSizeIterator for LinSpace {}

impl FusedIterator for LinSpace {}
