pub mod features;
pub mod retrieve;
pub mod run;
