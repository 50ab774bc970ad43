//! Inquiry (support desk) domain module.

mod model;
mod repository;

pub use model::{
    Inquiry, InquiryFilter, InquiryId, InquiryStats, InquiryStatus, InquiryUpdate, NewInquiry,
    sort_newest_first,
};
pub use repository::InquiryStore;
