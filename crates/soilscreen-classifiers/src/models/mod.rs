pub mod artifact;
pub mod classifier_trait;
pub mod gbdt;
