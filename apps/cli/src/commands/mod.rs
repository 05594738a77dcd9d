//! 命令定义和实现

pub mod config;
pub mod force;
pub mod inspect;
pub mod profiles;
pub mod replay;
pub mod sweep;

pub use config::ConfigCommand;
pub use force::ForceCommand;
pub use inspect::InspectCommand;
pub use profiles::ProfilesCommand;
pub use replay::ReplayCommand;
pub use sweep::SweepCommand;
