pub mod cognitive;
pub mod cyclomatic;
pub mod halstead;

pub use cognitive::cognitive_complexity;
pub use cyclomatic::cyclomatic_complexity;
pub use halstead::halstead_metrics;
