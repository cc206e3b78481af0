pub mod quidax;
pub mod unwrap;
