pub mod registry;
pub mod sales;

pub use registry::StadiumRegistry;
pub use sales::SaleLedger;
