//! Behavior options for sequences.

/// What `slice` does with a bound past the last index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// Clamp the bound to the last index and log a warning.
    #[default]
    Clamp,
    /// Reject the slice with `InvalidArgument::BoundOutOfRange`.
    Strict,
}

/// Options for a [`Sequence`](crate::Sequence).
///
/// Options travel with the data: clones, slices and split groups inherit the
/// options of the sequence they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceOptions {
    /// Out-of-range handling for `slice` bounds.
    pub bounds: BoundsPolicy,
}

impl Default for SequenceOptions {
    fn default() -> Self {
        SequenceOptions::default()
    }
}

impl SequenceOptions {
    pub(crate) const fn default() -> Self {
        Self {
            bounds: BoundsPolicy::Clamp,
        }
    }

    pub const fn strict() -> Self {
        Self {
            bounds: BoundsPolicy::Strict,
        }
    }
}
