//! Status returned by behavior nodes.

/// The result of evaluating a behavior node for one tick.
///
/// `Running` is an ordinary return value, not a suspension point: a tick
/// always runs to completion, and "resuming" a running behavior next frame is
/// achieved purely through state the node left in the actor's [`BtMemory`].
///
/// [`BtMemory`]: crate::BtMemory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The condition held, or the action completed.
    Success,

    /// The condition did not hold, or the action could not complete.
    ///
    /// Failure is a normal behavioral outcome, never an error.
    Failure,

    /// The action is mid-flight and wants to be ticked again next frame.
    Running,
}

impl Status {
    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }
}
