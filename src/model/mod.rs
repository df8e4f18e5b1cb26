pub mod constraint;
pub mod constraints;
pub mod domain;
pub mod instance;
pub mod objective;
pub mod variable;
