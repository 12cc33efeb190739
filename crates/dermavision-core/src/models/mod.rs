pub mod condition_info;
pub mod prediction;
pub mod prevalence;
