pub mod api_utils;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod query;
pub mod request_scope;
