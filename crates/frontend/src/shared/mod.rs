pub mod answer_format;
pub mod api_utils;
pub mod components;
pub mod http_reply;
pub mod status;
