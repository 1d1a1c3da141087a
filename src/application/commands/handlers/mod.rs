//! Command Handlers 实现
//!
//! 所有 CommandHandler 的具体实现

mod analysis_handlers;
mod lexicon_handlers;
mod network_handlers;
mod novel_handlers;

#[cfg(test)]
pub(crate) mod test_support;

pub use analysis_handlers::*;
pub use lexicon_handlers::*;
pub use network_handlers::*;
pub use novel_handlers::*;
