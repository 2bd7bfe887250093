//! The boolean formula representation and its variable identities.

#[allow(clippy::module_inception)]
mod formula;
pub use formula::Formula;
pub use formula::FormulaRef;

mod vars;
pub use vars::InstanceId;
pub use vars::VarId;
pub use vars::VarKey;
pub use vars::VarStore;
