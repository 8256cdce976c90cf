mod business_data;
mod payloads;
mod period;
mod spending;

pub use business_data::{BusinessData, BusinessDataPatch};
pub use payloads::{BookingPayload, LeadPayload};
pub use period::{EntryPeriod, Period};
pub use spending::SpendingMap;
