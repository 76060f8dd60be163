//! Week grid editing operations.
//!
//! Four operations, each a sequence of [`Grid`](crate::grid::Grid)
//! range calls that preserves block contiguity and re-synchronizes
//! markers:
//! - [`create_next_week`] — append a template-sized block after the
//!   last one and stamp its headers,
//! - [`archive_oldest_week`] — copy block 0 to the archive sheet and
//!   compact everything below it upward,
//! - [`grow_current_week`] / [`shrink_current_week`] — resize one block
//!   in place, shifting only the rows below it.
//!
//! Operations run to completion synchronously. Validation failures
//! before the first grid write abort cleanly; a date error inside
//! create-next-week can leave the already-copied template in place
//! (see [`create_next_week`]).

mod archive;
mod create;
mod resize;

pub use archive::{archive_oldest_week, ArchiveReport};
pub use create::create_next_week;
pub use resize::{grow_current_week, shrink_current_week};
