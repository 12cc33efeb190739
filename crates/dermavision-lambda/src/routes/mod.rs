pub mod conditions;
pub mod health;
pub mod labels;
pub mod predict;
