pub mod classifier;
pub mod reconciler;
