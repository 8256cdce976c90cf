pub mod consultation;
pub mod dashboard;
pub mod industry;
pub mod lead_capture;
pub mod opportunities;
pub mod spending;
