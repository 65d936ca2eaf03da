//! Editor state and the session that drives rendering, interaction and export over it.

pub(crate) mod session;
pub(crate) mod state;
