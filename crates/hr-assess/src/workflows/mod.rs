pub mod assessment;
pub mod hr;
