pub mod boundary;
pub mod capture;
pub mod draw;
pub mod gravity;
pub mod pointer;
pub mod spawn;
pub mod starfield;
