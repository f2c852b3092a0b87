pub mod cipher;
pub mod compute;
pub mod display;
pub mod entities;
pub mod recorder;
