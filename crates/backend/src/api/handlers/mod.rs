pub mod u601_upload_document;
pub mod u602_ask_question;
