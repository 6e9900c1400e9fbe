pub mod a101_document;
