pub mod decision;

pub use decision::{Decision, DecisionFunction, sigmoid, threshold};
