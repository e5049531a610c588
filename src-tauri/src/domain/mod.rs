//! Usage: Domain logic (pure placement geometry, bezel pack state machine).

pub(crate) mod bezels;
pub(crate) mod placement;
