//! Setup failures. None of these propagate past the component: the field is
//! cosmetic, so a failure means nothing is drawn and no listeners remain.

use thiserror::Error;

/// Why the field could not be started.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
	/// `window` is not available (not running in a browser).
	#[error("no browser window available")]
	NoWindow,

	/// The canvas refused a `2d` context.
	#[error("2d canvas context unavailable")]
	ContextUnavailable,

	/// `addEventListener` threw for the named event.
	#[error("failed to attach {0} listener")]
	Listener(&'static str),

	/// The first `requestAnimationFrame` call threw.
	#[error("failed to request animation frame")]
	AnimationFrame,
}
