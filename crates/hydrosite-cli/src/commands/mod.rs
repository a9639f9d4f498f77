pub mod enbr;
pub mod rtheta;
pub mod watpdb;
