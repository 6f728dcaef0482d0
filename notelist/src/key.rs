#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::NoteId;

/// Measured heights keyed by note identity.
#[cfg(feature = "std")]
pub(crate) type IdSizeMap = HashMap<NoteId, u32>;
#[cfg(not(feature = "std"))]
pub(crate) type IdSizeMap = BTreeMap<NoteId, u32>;
