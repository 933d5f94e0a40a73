pub mod analyze;
pub mod decode;
pub mod encode;
pub mod run;
