pub mod buyer;
pub mod invoice;
pub mod policy;
pub mod portfolio;

pub use buyer::{Buyer, RiskRating};
pub use invoice::{Invoice, InvoiceStatus};
pub use policy::Policy;
pub use portfolio::Portfolio;
