pub mod add;
pub mod explain;
pub mod list;
pub mod quiz;
pub mod stats;
